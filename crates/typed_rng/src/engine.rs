//! Bit-generation engine abstraction.
//!
//! [`RandomGenerator`](crate::RandomGenerator) depends only on the [`Engine`]
//! trait, never on a concrete algorithm. Implementations are provided for the
//! engines shipped with the `rand` crate; any other `RngCore + Clone` type
//! can be plugged in by implementing the trait.

use rand::rngs::{OsRng, SmallRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::fmt;

/// Engine used when no engine type is named explicitly.
pub type DefaultEngine = StdRng;

/// A seedable, stateful pseudo-random bit generator.
///
/// The sampling laws in [`rand_distr`] consume the engine through its
/// [`RngCore`] supertrait; the methods here cover seeding and raw output.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use typed_rng::Engine;
///
/// let mut a = StdRng::from_seed_value(7);
/// let mut b = StdRng::from_seed_value(7);
/// assert_eq!(a.next_output(), b.next_output());
/// ```
pub trait Engine: RngCore + Clone {
    /// Native seed type consumed by the engine.
    type Seed: Copy + fmt::Debug + PartialEq;

    /// Raw value produced by a single engine step.
    type Output: Copy + fmt::Debug;

    /// Creates an engine whose output sequence is fully determined by `seed`.
    fn from_seed_value(seed: Self::Seed) -> Self;

    /// Draws a seed from the operating-system entropy source.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source is unavailable.
    fn entropy_seed() -> Self::Seed;

    /// Advances the engine by one step and returns the raw output.
    fn next_output(&mut self) -> Self::Output;

    /// Discards the current state and reseeds the engine in place.
    fn reseed(&mut self, seed: Self::Seed) {
        *self = Self::from_seed_value(seed);
    }
}

macro_rules! impl_u64_seeded_engine {
    ($($engine:ty),* $(,)?) => {
        $(
            impl Engine for $engine {
                type Seed = u64;
                type Output = u64;

                #[inline]
                fn from_seed_value(seed: u64) -> Self {
                    <$engine as SeedableRng>::seed_from_u64(seed)
                }

                #[inline]
                fn entropy_seed() -> u64 {
                    OsRng.next_u64()
                }

                #[inline]
                fn next_output(&mut self) -> u64 {
                    self.next_u64()
                }
            }
        )*
    };
}

impl_u64_seeded_engine!(StdRng, SmallRng);
