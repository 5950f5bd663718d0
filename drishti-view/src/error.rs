//! Error types for Drishti-View

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Drishti-View error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Epoch timestamp cannot be represented as a date
    #[error("Timestamp out of range: {0} ms")]
    TimestampOutOfRange(i64),

    /// Line coefficients with a zero normal vector
    #[error("Degenerate line: a = {a}, b = {b}")]
    DegenerateLine {
        /// X coefficient
        a: f64,
        /// Y coefficient
        b: f64,
    },

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigLoadError),
}
