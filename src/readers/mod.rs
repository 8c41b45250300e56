pub mod listing_reader;

pub use listing_reader::ListingReader;
