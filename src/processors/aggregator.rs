//! Grouped aggregates over the listing table.
//!
//! Grouped outputs are ordered by key ascending. Value counts are ordered by
//! descending frequency, ties broken by name.

use crate::models::{CategoryCount, Listing, NeighbourhoodSummary, RoomTypePrice};
use std::collections::{BTreeMap, HashMap};

#[derive(Default)]
struct MeanAccumulator {
    count: usize,
    price: f64,
    latitude: f64,
    longitude: f64,
}

impl MeanAccumulator {
    fn push(&mut self, listing: &Listing) {
        self.count += 1;
        self.price += listing.price;
        self.latitude += listing.latitude;
        self.longitude += listing.longitude;
    }

    fn mean(&self, sum: f64) -> f64 {
        sum / self.count as f64
    }
}

/// Count listings per neighbourhood group, most frequent first
pub fn neighbourhood_group_counts(listings: &[Listing]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for listing in listings {
        *counts.entry(listing.neighbourhood_group.as_str()).or_default() += 1;
    }

    let mut counts: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();

    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.cmp(&b.category))
    });

    counts
}

/// Mean price for each distinct room type
pub fn mean_price_by_room_type(listings: &[Listing]) -> Vec<RoomTypePrice> {
    group_by(listings, |l| l.room_type.as_str())
        .into_iter()
        .map(|(room_type, acc)| RoomTypePrice {
            room_type: room_type.to_string(),
            mean_price: acc.mean(acc.price),
        })
        .collect()
}

/// Mean price, latitude and longitude for each distinct neighbourhood
pub fn neighbourhood_summaries(listings: &[Listing]) -> Vec<NeighbourhoodSummary> {
    group_by(listings, |l| l.neighbourhood.as_str())
        .into_iter()
        .map(|(neighbourhood, acc)| NeighbourhoodSummary {
            neighbourhood: neighbourhood.to_string(),
            mean_price: acc.mean(acc.price),
            mean_latitude: acc.mean(acc.latitude),
            mean_longitude: acc.mean(acc.longitude),
            listings: acc.count,
        })
        .collect()
}

fn group_by<'a, F>(listings: &'a [Listing], key: F) -> BTreeMap<&'a str, MeanAccumulator>
where
    F: Fn(&'a Listing) -> &'a str,
{
    let mut groups: BTreeMap<&str, MeanAccumulator> = BTreeMap::new();
    for listing in listings {
        groups.entry(key(listing)).or_default().push(listing);
    }
    groups
}
