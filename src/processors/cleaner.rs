use crate::models::Listing;
use crate::utils::constants::{MAX_PRICE_EXCLUSIVE, MIN_PRICE_EXCLUSIVE};

/// Row counts dropped by each cleaning rule.
///
/// A row is attributed to the first rule it fails, in the order the rules
/// are applied: missing reviews per month, non-positive price, price cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub total_records: usize,
    pub missing_reviews_per_month: usize,
    pub non_positive_price: usize,
    pub price_outliers: usize,
    pub retained_records: usize,
}

impl CleaningReport {
    pub fn dropped_records(&self) -> usize {
        self.total_records - self.retained_records
    }

    pub fn summary(&self) -> String {
        format!(
            "Cleaning: {} of {} listings retained\n\
            - Missing reviews per month: {}\n\
            - Non-positive price: {}\n\
            - Price outliers: {}",
            self.retained_records,
            self.total_records,
            self.missing_reviews_per_month,
            self.non_positive_price,
            self.price_outliers
        )
    }
}

enum DropReason {
    MissingReviewsPerMonth,
    NonPositivePrice,
    PriceOutlier,
}

pub struct DataCleaner {
    min_price_exclusive: f64,
    max_price_exclusive: f64,
}

impl DataCleaner {
    pub fn new() -> Self {
        Self {
            min_price_exclusive: MIN_PRICE_EXCLUSIVE,
            max_price_exclusive: MAX_PRICE_EXCLUSIVE,
        }
    }

    pub fn with_price_bounds(min_price_exclusive: f64, max_price_exclusive: f64) -> Self {
        Self {
            min_price_exclusive,
            max_price_exclusive,
        }
    }

    /// Drop incomplete and out-of-range listings, keeping input order
    pub fn clean(&self, listings: Vec<Listing>) -> (Vec<Listing>, CleaningReport) {
        let mut report = CleaningReport {
            total_records: listings.len(),
            ..Default::default()
        };

        let cleaned: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| match self.drop_reason(listing) {
                None => true,
                Some(DropReason::MissingReviewsPerMonth) => {
                    report.missing_reviews_per_month += 1;
                    false
                }
                Some(DropReason::NonPositivePrice) => {
                    report.non_positive_price += 1;
                    false
                }
                Some(DropReason::PriceOutlier) => {
                    report.price_outliers += 1;
                    false
                }
            })
            .collect();

        report.retained_records = cleaned.len();

        tracing::info!(
            retained = report.retained_records,
            dropped = report.dropped_records(),
            "Cleaned listings"
        );

        (cleaned, report)
    }

    pub fn is_retained(&self, listing: &Listing) -> bool {
        self.drop_reason(listing).is_none()
    }

    fn drop_reason(&self, listing: &Listing) -> Option<DropReason> {
        if !listing.has_reviews_per_month() {
            Some(DropReason::MissingReviewsPerMonth)
        } else if listing.price.is_nan() || listing.price <= self.min_price_exclusive {
            Some(DropReason::NonPositivePrice)
        } else if listing.price >= self.max_price_exclusive {
            Some(DropReason::PriceOutlier)
        } else {
            None
        }
    }
}

impl Default for DataCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listing(price: f64, reviews_per_month: Option<f64>) -> Listing {
        Listing::new(
            "Brooklyn".to_string(),
            "Williamsburg".to_string(),
            40.71,
            -73.95,
            "Entire home/apt".to_string(),
            price,
            2,
            10,
            reviews_per_month,
        )
    }

    #[test]
    fn test_clean_applies_all_rules() {
        let listings = vec![
            listing(100.0, Some(1.0)),
            listing(0.0, Some(1.0)),
            listing(250.0, None),
            listing(1000.0, Some(0.5)),
            listing(999.0, Some(0.5)),
            listing(0.0, None),
        ];

        let (cleaned, report) = DataCleaner::new().clean(listings);

        assert_eq!(
            cleaned.iter().map(|l| l.price).collect::<Vec<_>>(),
            vec![100.0, 999.0]
        );
        assert_eq!(
            report,
            CleaningReport {
                total_records: 6,
                missing_reviews_per_month: 2,
                non_positive_price: 1,
                price_outliers: 1,
                retained_records: 2,
            }
        );
        assert_eq!(report.dropped_records(), 4);
    }

    #[test]
    fn test_cleaned_rows_satisfy_invariants() {
        let listings: Vec<Listing> = (0..50)
            .map(|i| {
                let price = (i as f64) * 37.0 - 100.0;
                let rpm = if i % 7 == 0 { None } else { Some(i as f64 / 10.0) };
                listing(price, rpm)
            })
            .collect();

        let (cleaned, _) = DataCleaner::new().clean(listings);

        assert!(!cleaned.is_empty());
        for listing in &cleaned {
            assert!(listing.price > 0.0);
            assert!(listing.price < 1000.0);
            assert!(listing.reviews_per_month.is_some());
        }
    }

    #[test]
    fn test_nan_price_never_retained() {
        let listings = vec![listing(f64::NAN, Some(0.5)), listing(120.0, Some(0.5))];

        let (cleaned, report) = DataCleaner::new().clean(listings);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].price, 120.0);
        assert_eq!(report.non_positive_price, 1);
        assert!(!DataCleaner::new().is_retained(&listing(f64::INFINITY, Some(0.5))));
    }

    #[test]
    fn test_custom_price_bounds() {
        let cleaner = DataCleaner::with_price_bounds(50.0, 200.0);

        assert!(!cleaner.is_retained(&listing(50.0, Some(1.0))));
        assert!(cleaner.is_retained(&listing(51.0, Some(1.0))));
        assert!(!cleaner.is_retained(&listing(200.0, Some(1.0))));
    }
}
