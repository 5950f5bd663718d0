//! Unified configuration loading for drishti-view.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod drishti;
mod error;
mod time;

pub use drishti::DrishtiConfig;
pub use error::ConfigLoadError;
pub use time::{Clock, TimeSection};
