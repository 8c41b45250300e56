use crate::error::{ProcessingError, Result};
use crate::models::Listing;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use validator::Validate;

pub struct ListingReader {
    validate_rows: bool,
}

impl ListingReader {
    pub fn new() -> Self {
        Self {
            validate_rows: true,
        }
    }

    pub fn with_validation(validate_rows: bool) -> Self {
        Self { validate_rows }
    }

    /// Read every listing from a headered CSV file
    pub fn read_listings(&self, path: &Path) -> Result<Vec<Listing>> {
        let file = File::open(path)?;
        let listings = self.read_from(file)?;

        tracing::debug!(
            "Loaded {} listings from {}",
            listings.len(),
            path.display()
        );

        Ok(listings)
    }

    /// Read listings from any CSV source
    pub fn read_from<R: Read>(&self, source: R) -> Result<Vec<Listing>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut listings = Vec::new();
        for (index, row) in reader.deserialize::<Listing>().enumerate() {
            let listing = row?;

            if self.validate_rows {
                // Row 1 is the header
                listing.validate().map_err(|e| {
                    ProcessingError::InvalidFormat(format!("Row {}: {}", index + 2, e))
                })?;

                if let Some(field) = listing.non_finite_field() {
                    return Err(ProcessingError::InvalidFormat(format!(
                        "Row {}: {} is not a finite number",
                        index + 2,
                        field
                    )));
                }
            }

            listings.push(listing);
        }

        Ok(listings)
    }
}

impl Default for ListingReader {
    fn default() -> Self {
        Self::new()
    }
}
