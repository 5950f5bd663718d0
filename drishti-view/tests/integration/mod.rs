//! Integration tests for drishti-view
//!
//! These tests drive the helpers the way the visualization frontend does:
//! messages arrive as JSON, configuration comes from YAML, and results are
//! turned into points and strings for display.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration -- --nocapture
//! ```

mod config_file;
mod frontend;
