use serde::{Deserialize, Serialize};
use validator::Validate;

/// One rental listing row from the dataset.
///
/// Columns the analysis does not use (host details, last review date,
/// availability) are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Listing {
    #[serde(default)]
    pub id: Option<u64>,

    #[validate(length(min = 1))]
    pub neighbourhood_group: String,

    pub neighbourhood: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(length(min = 1))]
    pub room_type: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(range(min = 1))]
    pub minimum_nights: u32,

    pub number_of_reviews: u32,

    pub reviews_per_month: Option<f64>,
}

impl Listing {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        neighbourhood_group: String,
        neighbourhood: String,
        latitude: f64,
        longitude: f64,
        room_type: String,
        price: f64,
        minimum_nights: u32,
        number_of_reviews: u32,
        reviews_per_month: Option<f64>,
    ) -> Self {
        Self {
            id: None,
            neighbourhood_group,
            neighbourhood,
            latitude,
            longitude,
            room_type,
            price,
            minimum_nights,
            number_of_reviews,
            reviews_per_month,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_in_group(&self, group: &str) -> bool {
        self.neighbourhood_group == group
    }

    pub fn has_reviews_per_month(&self) -> bool {
        self.reviews_per_month.is_some()
    }

    /// Name of the first numeric field holding NaN or an infinity.
    ///
    /// Range validation lets NaN through, so loaders check this separately.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        if !self.latitude.is_finite() {
            Some("latitude")
        } else if !self.longitude.is_finite() {
            Some("longitude")
        } else if !self.price.is_finite() {
            Some("price")
        } else if self.reviews_per_month.is_some_and(|r| !r.is_finite()) {
            Some("reviews_per_month")
        } else {
            None
        }
    }

    /// Natural log of the price, `None` for non-positive prices.
    pub fn log_price(&self) -> Option<f64> {
        (self.price > 0.0).then(|| self.price.ln())
    }
}
