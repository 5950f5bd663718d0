//! Configuration loading errors.

/// Error while loading a YAML configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// File could not be read
    #[error("Failed to read config: {0}")]
    Io(String),

    /// File contents are not valid configuration
    #[error("Failed to parse config: {0}")]
    Parse(String),
}
