use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("No listings available to render {figure}")]
    EmptySubset { figure: String },

    #[error("Plotting error: {0}")]
    Plot(String),

    #[error("Missing required data: {0}")]
    MissingData(String),
}

impl ProcessingError {
    /// Wrap any plotters drawing error, which are generic over the backend.
    pub fn plot<E: std::fmt::Display>(err: E) -> Self {
        ProcessingError::Plot(err.to_string())
    }
}
