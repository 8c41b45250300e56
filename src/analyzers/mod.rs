pub mod listing_analyzer;

pub use listing_analyzer::{ListingAnalyzer, ListingStatistics};
