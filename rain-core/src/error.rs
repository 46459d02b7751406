/// Error types for loading rainfall datasets
use thiserror::Error;

/// Reasons a rainfall dataset is rejected at load time.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Failed to parse the JSON document
    #[error("Failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Uncompressed input is not valid UTF-8
    #[error("Dataset is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Failed to decompress a gzipped document
    #[error("Failed to decompress dataset: {0}")]
    Decompression(#[from] std::io::Error),

    /// The dataset has no series at all
    #[error("Dataset contains no series")]
    Empty,

    /// Two series share the same year label
    #[error("Duplicate series: {0}")]
    DuplicateSeries(String),

    /// A series has no observed samples
    #[error("Series {year} has no samples")]
    EmptySeries { year: String },

    /// Day indices must start at 0 and increase by exactly 1
    #[error("Series {year}: expected day {expected}, found day {found}")]
    NonContiguousDay {
        year: String,
        expected: u32,
        found: u32,
    },

    /// Cumulative values must be finite and non-negative
    #[error("Series {year}: invalid cumulative value {value} at day {day}")]
    InvalidValue { year: String, day: u32, value: f64 },

    /// Cumulative values must never decrease
    #[error("Series {year}: cumulative value decreases at day {day}")]
    Decreasing { year: String, day: u32 },

    /// Exactly one series must be flagged as the current year
    #[error("Expected exactly one current series, found {0}")]
    CurrentSeriesCount(usize),

    /// Only the current series may carry a forecast
    #[error("Series {year} has a forecast but is not the current series")]
    ForecastOnCompletedSeries { year: String },
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
