use crate::utils::constants::*;
use std::fmt;

/// The five charts produced by the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    NeighbourhoodGroupDistribution,
    LogPriceVsReviews,
    MeanPriceByRoomType,
    NeighbourhoodPriceDistribution,
    MinimumNightsVsPrice,
}

impl Figure {
    pub const ALL: [Figure; 5] = [
        Figure::NeighbourhoodGroupDistribution,
        Figure::LogPriceVsReviews,
        Figure::MeanPriceByRoomType,
        Figure::NeighbourhoodPriceDistribution,
        Figure::MinimumNightsVsPrice,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Figure::NeighbourhoodGroupDistribution => FIGURE_1_FILE,
            Figure::LogPriceVsReviews => FIGURE_2_FILE,
            Figure::MeanPriceByRoomType => FIGURE_3_FILE,
            Figure::NeighbourhoodPriceDistribution => FIGURE_4_FILE,
            Figure::MinimumNightsVsPrice => FIGURE_5_FILE,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        match self {
            Figure::NeighbourhoodGroupDistribution => FIGURE_1_SIZE,
            Figure::LogPriceVsReviews => FIGURE_2_SIZE,
            Figure::MeanPriceByRoomType => FIGURE_3_SIZE,
            Figure::NeighbourhoodPriceDistribution => FIGURE_4_SIZE,
            Figure::MinimumNightsVsPrice => FIGURE_5_SIZE,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Figure::NeighbourhoodGroupDistribution => "Number of Listings by NYC Neighborhood Group",
            Figure::LogPriceVsReviews => {
                "Logarithm of Airbnb Prices in USD by Review and Neighbourhood"
            }
            Figure::MeanPriceByRoomType => "Mean Price of Airbnb Listings in Manhattan by Room Type",
            Figure::NeighbourhoodPriceDistribution => {
                "Airbnb Listing Distribution and Average Prices by Manhattan Neighborhood in 2019"
            }
            Figure::MinimumNightsVsPrice => {
                "Relationship Between Logarithmic Price per Night and Minimum Stay Requirement for Airbnbs in Manhattan"
            }
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}
