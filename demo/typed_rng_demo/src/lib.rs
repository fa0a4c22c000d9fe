//! # typed_rng Demo
//!
//! Demonstration program for the `typed_rng` crate: draws one value (or a
//! configurable number of values) from each sampling operation and prints
//! them, section by section.
//!
//! Configuration is read from a TOML file, overridden by `TYPED_RNG_*`
//! environment variables, then by command-line flags.

pub mod config;
pub mod error;
pub mod report;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{DemoConfig, EngineKind};
    pub use crate::error::DemoError;
    pub use crate::report::{run, write_report};
}
