//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (config loading, engine setup, argument parsing)
//! - `analyze` - Classification, forecasting and distribution analysis
//! - `train` - Retrain the classifier from a CSV corpus
//! - `serve` - Web server command
//! - `status` - Config and classifier status

pub mod analyze;
pub mod core;
pub mod serve;
pub mod status;
pub mod train;

// Re-export command functions for main.rs
pub use analyze::*;
pub use core::*;
pub use serve::*;
pub use status::*;
pub use train::*;
