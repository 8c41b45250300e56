pub mod aggregator;
pub mod cleaner;
pub mod filter;

pub use aggregator::{mean_price_by_room_type, neighbourhood_group_counts, neighbourhood_summaries};
pub use cleaner::{CleaningReport, DataCleaner};
pub use filter::ListingFilter;
