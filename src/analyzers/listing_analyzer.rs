use crate::error::{ProcessingError, Result};
use crate::models::Listing;
use crate::processors::neighbourhood_group_counts;
use std::collections::HashSet;

#[derive(Debug)]
pub struct ListingStatistics {
    pub total_listings: usize,
    pub neighbourhood_groups: usize,
    pub neighbourhoods: usize,
    pub room_types: usize,
    pub price_stats: PriceStats,
    pub largest_group: (String, usize),
    pub geographic_bounds: GeographicBounds,
}

#[derive(Debug)]
pub struct PriceStats {
    pub min_price: f64,
    pub max_price: f64,
    pub mean_price: f64,
    pub median_price: f64,
}

#[derive(Debug)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

pub struct ListingAnalyzer;

impl ListingAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_statistics(&self, listings: &[Listing]) -> Result<ListingStatistics> {
        let first = listings.first().ok_or_else(|| {
            ProcessingError::MissingData("No listings to analyze".to_string())
        })?;

        let mut groups = HashSet::new();
        let mut neighbourhoods = HashSet::new();
        let mut room_types = HashSet::new();
        let mut prices = Vec::with_capacity(listings.len());

        let mut min_lat = first.latitude;
        let mut max_lat = first.latitude;
        let mut min_lon = first.longitude;
        let mut max_lon = first.longitude;

        for listing in listings {
            groups.insert(listing.neighbourhood_group.as_str());
            neighbourhoods.insert(listing.neighbourhood.as_str());
            room_types.insert(listing.room_type.as_str());
            prices.push(listing.price);

            min_lat = min_lat.min(listing.latitude);
            max_lat = max_lat.max(listing.latitude);
            min_lon = min_lon.min(listing.longitude);
            max_lon = max_lon.max(listing.longitude);
        }

        prices.sort_by(|a, b| a.total_cmp(b));

        let largest_group = neighbourhood_group_counts(listings)
            .into_iter()
            .next()
            .map(|c| (c.category, c.count))
            .unwrap_or_default();

        Ok(ListingStatistics {
            total_listings: listings.len(),
            neighbourhood_groups: groups.len(),
            neighbourhoods: neighbourhoods.len(),
            room_types: room_types.len(),
            price_stats: PriceStats {
                min_price: prices[0],
                max_price: prices[prices.len() - 1],
                mean_price: prices.iter().sum::<f64>() / prices.len() as f64,
                median_price: median(&prices),
            },
            largest_group,
            geographic_bounds: GeographicBounds {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            },
        })
    }
}

impl Default for ListingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Median of an already sorted, non-empty slice
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

impl ListingStatistics {
    pub fn summary(&self) -> String {
        format!(
            "Listings: {} total\n\
            Neighbourhood Groups: {} (largest: {} with {} listings)\n\
            Neighbourhoods: {}\n\
            Room Types: {}\n\
            Price Range: ${:.0} to ${:.0} (mean ${:.2}, median ${:.2})\n\
            Coverage: {:.3}°N-{:.3}°N, {:.3}°W-{:.3}°W",
            self.total_listings,
            self.neighbourhood_groups,
            self.largest_group.0,
            self.largest_group.1,
            self.neighbourhoods,
            self.room_types,
            self.price_stats.min_price,
            self.price_stats.max_price,
            self.price_stats.mean_price,
            self.price_stats.median_price,
            self.geographic_bounds.min_lat,
            self.geographic_bounds.max_lat,
            self.geographic_bounds.max_lon.abs(),
            self.geographic_bounds.min_lon.abs()
        )
    }
}
