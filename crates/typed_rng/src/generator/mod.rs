//! Typed random generator wrapping a pluggable engine.
//!
//! [`RandomGenerator`] owns exactly one [`Engine`] and samples typed values
//! from it. Sampling laws (`Uniform`, `Bernoulli`) are built per call from
//! the call's arguments and discarded afterwards; the engine is the only
//! state carried between calls.
//!
//! Rust has no default arguments, so every defaulted parameter is exposed as
//! a pair of methods:
//!
//! | Operation | Defaulted form | Explicit form |
//! |-----------|----------------|---------------|
//! | integer   | [`integer`](RandomGenerator::integer) (full range of `T`) | [`integer_in`](RandomGenerator::integer_in) |
//! | real      | [`real`](RandomGenerator::real) (`[0, 1)`) | [`real_in`](RandomGenerator::real_in) |
//! | boolean   | [`boolean`](RandomGenerator::boolean) (`p = 0.5`) | [`boolean_with`](RandomGenerator::boolean_with) |
//! | seed      | [`reseed`](RandomGenerator::reseed) (entropy) | [`seed`](RandomGenerator::seed) |

use rand::RngCore;
use rand_distr::{Bernoulli, Distribution, Uniform};
use tracing::debug;

use crate::engine::{DefaultEngine, Engine};
use crate::error::RngError;
use crate::sample::{Integer, Real};

/// Probability used by [`RandomGenerator::boolean`].
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Convenience wrapper around a pseudo-random engine.
///
/// Produces uniformly distributed integers and reals within caller-specified
/// bounds, and weighted booleans. Output is fully reproducible when the
/// generator is seeded explicitly.
///
/// The generator has value semantics: cloning it clones the engine state,
/// so the clone replays the original's future output.
///
/// # Examples
///
/// ```rust
/// use typed_rng::RandomGenerator;
///
/// let mut rng1 = RandomGenerator::with_seed(42);
/// let mut rng2 = RandomGenerator::with_seed(42);
///
/// let a: i32 = rng1.integer_in(-10, 10);
/// let b: i32 = rng2.integer_in(-10, 10);
/// assert_eq!(a, b);
/// assert!((-10..=10).contains(&a));
/// ```
#[derive(Clone, Debug)]
pub struct RandomGenerator<E: Engine = DefaultEngine> {
    /// The underlying engine instance.
    engine: E,
    /// The last seed applied, kept for reproducibility tracking.
    seed: Option<E::Seed>,
}

impl RandomGenerator<DefaultEngine> {
    /// Creates a generator over the default engine, seeded from the
    /// operating-system entropy source.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source is unavailable.
    #[inline]
    pub fn new() -> Self {
        Self::from_entropy()
    }

    /// Creates a generator over the default engine with an explicit seed.
    ///
    /// ```rust
    /// use typed_rng::RandomGenerator;
    ///
    /// let rng = RandomGenerator::with_seed(7);
    /// assert_eq!(rng.seed_value(), Some(7));
    /// ```
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_seed(seed)
    }
}

impl<E: Engine> Default for RandomGenerator<E> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<E: Engine> RandomGenerator<E> {
    /// Creates a generator seeded from the operating-system entropy source.
    ///
    /// The drawn seed is recorded and can be read back with
    /// [`seed_value`](Self::seed_value) to replay the run.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source is unavailable.
    pub fn from_entropy() -> Self {
        Self::from_seed(E::entropy_seed())
    }

    /// Creates a generator whose output is fully determined by `seed`.
    ///
    /// Every value of the seed type is legal.
    ///
    /// ```rust
    /// use rand::rngs::SmallRng;
    /// use typed_rng::RandomGenerator;
    ///
    /// let mut a = RandomGenerator::<SmallRng>::from_seed(99);
    /// let mut b = RandomGenerator::<SmallRng>::from_seed(99);
    /// assert_eq!(a.integer::<u64>(), b.integer::<u64>());
    /// ```
    pub fn from_seed(seed: E::Seed) -> Self {
        debug!(
            engine = std::any::type_name::<E>(),
            seed = ?seed,
            "seeding random generator"
        );
        Self {
            engine: E::from_seed_value(seed),
            seed: Some(seed),
        }
    }

    /// Wraps an already initialised engine.
    ///
    /// The seed of an externally built engine is unknown, so
    /// [`seed_value`](Self::seed_value) returns `None` until the generator
    /// is reseeded.
    pub fn from_engine(engine: E) -> Self {
        debug!(
            engine = std::any::type_name::<E>(),
            "wrapping existing engine"
        );
        Self { engine, seed: None }
    }

    /// Reseeds the engine in place with `seed`, discarding prior state.
    ///
    /// Subsequent output depends only on the new seed.
    pub fn seed(&mut self, seed: E::Seed) {
        debug!(seed = ?seed, "reseeding random generator");
        self.engine.reseed(seed);
        self.seed = Some(seed);
    }

    /// Reseeds the engine in place from the operating-system entropy source.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source is unavailable.
    pub fn reseed(&mut self) {
        self.seed(E::entropy_seed());
    }

    /// Returns the last seed applied, or `None` for a wrapped engine that
    /// has not been reseeded.
    #[inline]
    pub fn seed_value(&self) -> Option<E::Seed> {
        self.seed
    }

    /// Returns a reference to the underlying engine.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Consumes the generator and returns the underlying engine.
    #[inline]
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Advances the engine by one step and returns its raw output.
    #[inline]
    pub fn next_raw(&mut self) -> E::Output {
        self.engine.next_output()
    }

    /// Generates an integer spanning the full range of `T`.
    ///
    /// ```rust
    /// use typed_rng::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::with_seed(1);
    /// let _any_byte: u8 = rng.integer();
    /// let _any_i128 = rng.integer::<i128>();
    /// ```
    #[inline]
    pub fn integer<T: Integer>(&mut self) -> T {
        self.integer_in(T::min_value(), T::max_value())
    }

    /// Generates an integer uniformly distributed over `[min, max]`,
    /// inclusive on both ends.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. Use [`try_integer_in`](Self::try_integer_in)
    /// to get an error instead.
    #[inline]
    pub fn integer_in<T: Integer>(&mut self, min: T, max: T) -> T {
        Uniform::<T>::new_inclusive(min, max).sample(&mut self.engine)
    }

    /// Checked form of [`integer_in`](Self::integer_in).
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvertedBounds`] if `min > max`. The engine is
    /// left untouched in that case.
    pub fn try_integer_in<T: Integer>(&mut self, min: T, max: T) -> Result<T, RngError> {
        if min > max {
            return Err(RngError::inverted(min, max));
        }
        Ok(self.integer_in(min, max))
    }

    /// Generates a real number in `[0, 1)`.
    #[inline]
    pub fn real<T: Real>(&mut self) -> T {
        self.real_in(T::zero(), T::one())
    }

    /// Generates a real number uniformly distributed over `[min, max)`.
    ///
    /// `max` is excluded by the sampling law, though floating-point
    /// rounding can occasionally produce it. A degenerate interval
    /// (`min == max`, finite) returns `min` without advancing the engine.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`, if either bound is not finite, or if
    /// `max - min` overflows. Use [`try_real_in`](Self::try_real_in) to get
    /// an error instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_rng::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::with_seed(42);
    /// let value: f64 = rng.real_in(0.0, std::f64::consts::PI);
    /// assert!(value >= 0.0 && value < std::f64::consts::PI);
    /// ```
    #[inline]
    pub fn real_in<T: Real>(&mut self, min: T, max: T) -> T {
        if min == max && min.is_finite() {
            return min;
        }
        Uniform::<T>::new(min, max).sample(&mut self.engine)
    }

    /// Checked form of [`real_in`](Self::real_in).
    ///
    /// # Errors
    ///
    /// - [`RngError::NonFiniteRange`] if a bound is NaN or infinite, or if
    ///   `max - min` overflows
    /// - [`RngError::InvertedBounds`] if `min > max`
    pub fn try_real_in<T: Real>(&mut self, min: T, max: T) -> Result<T, RngError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RngError::non_finite(min, max));
        }
        if min > max {
            return Err(RngError::inverted(min, max));
        }
        if !(max - min).is_finite() {
            return Err(RngError::non_finite(min, max));
        }
        Ok(self.real_in(min, max))
    }

    /// Generates a boolean with an even chance of being true.
    #[inline]
    pub fn boolean(&mut self) -> bool {
        self.boolean_with(DEFAULT_PROBABILITY)
    }

    /// Generates a boolean that is true with probability `p`.
    ///
    /// Probabilities outside `[0, 1]` are clamped to the nearest end and
    /// NaN is treated as `0.0`.
    ///
    /// ```rust
    /// use typed_rng::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::with_seed(3);
    /// assert!(rng.boolean_with(1.0));
    /// assert!(!rng.boolean_with(0.0));
    /// assert!(rng.boolean_with(2.5));
    /// ```
    pub fn boolean_with(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        Bernoulli::new(p).map_or(false, |d| d.sample(&mut self.engine))
    }

    /// Checked form of [`boolean_with`](Self::boolean_with).
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidProbability`] if `p` is NaN or outside
    /// `[0, 1]`.
    pub fn try_boolean_with(&mut self, p: f64) -> Result<bool, RngError> {
        match Bernoulli::new(p) {
            Ok(d) => Ok(d.sample(&mut self.engine)),
            Err(_) => Err(RngError::InvalidProbability(p)),
        }
    }

    /// Fills the buffer with integers uniformly distributed over
    /// `[min, max]`.
    ///
    /// One sampling law is built for the whole buffer, and the values match
    /// those of the same number of [`integer_in`](Self::integer_in) calls.
    /// Empty buffers are a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is non-empty and `min > max`.
    pub fn fill_integer_in<T: Integer>(&mut self, buffer: &mut [T], min: T, max: T) {
        if buffer.is_empty() {
            return;
        }
        let dist = Uniform::<T>::new_inclusive(min, max);
        for value in buffer.iter_mut() {
            *value = dist.sample(&mut self.engine);
        }
    }

    /// Fills the buffer with reals uniformly distributed over `[min, max)`.
    ///
    /// Same conventions as [`real_in`](Self::real_in); empty buffers are a
    /// no-op.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`real_in`](Self::real_in) when
    /// the buffer is non-empty.
    pub fn fill_real_in<T: Real>(&mut self, buffer: &mut [T], min: T, max: T) {
        if buffer.is_empty() {
            return;
        }
        if min == max && min.is_finite() {
            buffer.fill(min);
            return;
        }
        let dist = Uniform::<T>::new(min, max);
        for value in buffer.iter_mut() {
            *value = dist.sample(&mut self.engine);
        }
    }
}

impl<E: Engine> RngCore for RandomGenerator<E> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.engine.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.engine.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.engine.try_fill_bytes(dest)
    }
}
