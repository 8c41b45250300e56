pub mod aggregates;
pub mod listing;

pub use aggregates::{CategoryCount, LinearFit, NeighbourhoodSummary, RoomTypePrice};
pub use listing::Listing;
