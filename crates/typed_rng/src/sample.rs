//! Capability bounds for sampled types.
//!
//! A type is acceptable for integer sampling exactly when it is a primitive
//! integer over which a uniform sampling law can be built; likewise for real
//! sampling and floating-point types. Both checks happen at compile time:
//!
//! ```compile_fail
//! let mut rng = typed_rng::RandomGenerator::with_seed(1);
//! let _: f64 = rng.integer();
//! ```
//!
//! ```compile_fail
//! let mut rng = typed_rng::RandomGenerator::with_seed(1);
//! let _: bool = rng.integer();
//! ```
//!
//! ```compile_fail
//! let mut rng = typed_rng::RandomGenerator::with_seed(1);
//! let _: char = rng.integer();
//! ```
//!
//! ```compile_fail
//! let mut rng = typed_rng::RandomGenerator::with_seed(1);
//! let _: u32 = rng.real();
//! ```

use num_traits::{Float, PrimInt};
use rand::distributions::uniform::SampleUniform;
use std::fmt;

/// Integral types accepted by `integer` sampling.
///
/// Covers every signed and unsigned primitive integer. `bool` and `char`
/// are rejected because they are not [`PrimInt`].
pub trait Integer: PrimInt + SampleUniform + fmt::Debug {}

impl<T> Integer for T where T: PrimInt + SampleUniform + fmt::Debug {}

/// Floating-point types accepted by `real` sampling (`f32`, `f64`).
pub trait Real: Float + SampleUniform + fmt::Debug {}

impl<T> Real for T where T: Float + SampleUniform + fmt::Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts_integer<T: Integer>() {}
    fn accepts_real<T: Real>() {}

    #[test]
    fn test_primitive_integers_are_accepted() {
        accepts_integer::<i8>();
        accepts_integer::<i16>();
        accepts_integer::<i32>();
        accepts_integer::<i64>();
        accepts_integer::<i128>();
        accepts_integer::<isize>();
        accepts_integer::<u8>();
        accepts_integer::<u16>();
        accepts_integer::<u32>();
        accepts_integer::<u64>();
        accepts_integer::<u128>();
        accepts_integer::<usize>();
    }

    #[test]
    fn test_floats_are_accepted() {
        accepts_real::<f32>();
        accepts_real::<f64>();
    }
}
