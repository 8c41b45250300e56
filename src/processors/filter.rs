use crate::models::Listing;

/// Row predicate used to derive subsets of the listing table.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingFilter {
    /// Neighbourhood group is one of the given names
    NeighbourhoodGroupIn(Vec<String>),
    /// Minimum nights at or below the threshold
    MaxMinimumNights(u32),
}

impl ListingFilter {
    pub fn neighbourhood_groups<S: AsRef<str>>(groups: &[S]) -> Self {
        ListingFilter::NeighbourhoodGroupIn(
            groups.iter().map(|g| g.as_ref().to_string()).collect(),
        )
    }

    pub fn neighbourhood_group(group: &str) -> Self {
        ListingFilter::NeighbourhoodGroupIn(vec![group.to_string()])
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            ListingFilter::NeighbourhoodGroupIn(groups) => {
                groups.iter().any(|g| listing.is_in_group(g))
            }
            ListingFilter::MaxMinimumNights(max) => listing.minimum_nights <= *max,
        }
    }

    /// Build a new table holding the matching rows in their original order
    pub fn select(&self, listings: &[Listing]) -> Vec<Listing> {
        let selected: Vec<Listing> = listings
            .iter()
            .filter(|l| self.matches(l))
            .cloned()
            .collect();

        tracing::debug!(
            "Filter {:?} selected {} of {} listings",
            self,
            selected.len(),
            listings.len()
        );

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(group: &str, minimum_nights: u32) -> Listing {
        Listing::new(
            group.to_string(),
            "Somewhere".to_string(),
            40.7,
            -73.9,
            "Private room".to_string(),
            80.0,
            minimum_nights,
            3,
            Some(0.2),
        )
    }

    fn table() -> Vec<Listing> {
        vec![
            listing("Manhattan", 1),
            listing("Queens", 30),
            listing("Brooklyn", 61),
            listing("Bronx", 2),
            listing("Manhattan", 60),
            listing("Staten Island", 365),
        ]
    }

    #[test]
    fn test_group_membership() {
        let filter = ListingFilter::neighbourhood_groups(&["Manhattan", "Brooklyn"]);
        let selected = filter.select(&table());

        let groups: Vec<&str> = selected
            .iter()
            .map(|l| l.neighbourhood_group.as_str())
            .collect();
        assert_eq!(groups, vec!["Manhattan", "Brooklyn", "Manhattan"]);
    }

    #[test]
    fn test_minimum_nights_threshold_inclusive() {
        let selected = ListingFilter::MaxMinimumNights(60).select(&table());

        assert_eq!(selected.len(), 4);
        assert!(selected.iter().all(|l| l.minimum_nights <= 60));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let source = table();
        let filter = ListingFilter::neighbourhood_groups(&["Manhattan", "Brooklyn"]);

        let once = filter.select(&source);
        let twice = filter.select(&once);

        assert_eq!(once, twice);
        // Source table untouched
        assert_eq!(source, table());
    }

    #[test]
    fn test_no_matches_yields_empty_table() {
        let selected = ListingFilter::neighbourhood_group("Hoboken").select(&table());
        assert!(selected.is_empty());
    }
}
