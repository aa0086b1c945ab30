/// Error types for the WQ core library
use thiserror::Error;

/// Main error type for loading and encoding water quality data
#[derive(Error, Debug)]
pub enum WqError {
    /// Failed to read input
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or write CSV data
    #[error("Failed to process CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to decompress data
    #[error("Failed to decompress data: {0}")]
    Decompression(String),

    /// A required column is not in the header row
    #[error("Required column missing: {0}")]
    MissingColumn(String),

    /// A `Date` cell could not be parsed
    #[error("Failed to parse date {value:?} on row {row}")]
    DateParse { row: usize, value: String },

    /// A numeric cell in a derived table could not be parsed
    #[error("Invalid number {value:?} on row {row}")]
    InvalidNumber { row: usize, value: String },

    /// Input file type that this library does not read
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),
}

/// Type alias for Results using WqError
pub type Result<T> = std::result::Result<T, WqError>;
