//! # typed_rng: Typed Random Sampling over Pluggable Engines
//!
//! `typed_rng` wraps a pseudo-random bit-generation engine and exposes typed
//! sampling operations without the caller having to build distribution
//! objects by hand:
//!
//! - Uniform integers over a closed interval, defaulting to the full range
//!   of the requested type (`generator::RandomGenerator::integer_in`)
//! - Uniform reals over a half-open interval, defaulting to `[0, 1)`
//!   (`generator::RandomGenerator::real_in`)
//! - Weighted booleans (`generator::RandomGenerator::boolean_with`)
//!
//! ## Module Structure
//!
//! - [`engine`]: the [`Engine`] abstraction and its implementations
//! - [`sample`]: the [`Integer`] and [`Real`] capability bounds
//! - [`generator`]: the [`RandomGenerator`] wrapper itself
//! - [`error`]: [`RngError`], reported by the checked `try_*` variants
//!
//! ## Usage Example
//!
//! ```rust
//! use typed_rng::RandomGenerator;
//!
//! let mut rng = RandomGenerator::with_seed(42);
//!
//! let die: u8 = rng.integer_in(1, 6);
//! assert!((1..=6).contains(&die));
//!
//! let angle: f64 = rng.real_in(0.0, std::f64::consts::PI);
//! assert!(angle >= 0.0 && angle < std::f64::consts::PI);
//!
//! let _heads = rng.boolean();
//! ```
//!
//! ## Threading
//!
//! Sampling mutates engine state through `&mut self` and there is no internal
//! locking. Use one independently seeded generator per thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engine;
pub mod error;
pub mod generator;
pub mod sample;

pub use engine::{DefaultEngine, Engine};
pub use error::RngError;
pub use generator::RandomGenerator;
pub use sample::{Integer, Real};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::{DefaultEngine, Engine};
    pub use crate::error::RngError;
    pub use crate::generator::RandomGenerator;
    pub use crate::sample::{Integer, Real};
}
