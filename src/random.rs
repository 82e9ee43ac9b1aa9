//! Sources of randomness for the problem generators.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Something which can produce uniformly distributed numbers.
///
/// Every [`rand::Rng`] is a [`RandomSource`], so `rand::thread_rng()` works
/// out of the box. Tests which need reproducible problems can use [`seeded()`]
/// or provide their own implementation.
pub trait RandomSource {
    /// Get the next number in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Pick an integer in the inclusive range `[lo, hi]`.
    ///
    /// The caller is responsible for making sure `lo <= hi`.
    fn int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        let span = (hi - lo + 1) as f64;
        (self.next_f64() * span).floor() as i64 + lo
    }
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 { self.gen::<f64>() }
}

/// Pick an integer in the inclusive range `[lo, hi]`.
pub fn random_int<R>(rng: &mut R, lo: i64, hi: i64) -> i64
where
    R: RandomSource + ?Sized,
{
    rng.int_in_range(lo, hi)
}

/// Returns `true` with the provided probability.
pub fn chance<R>(rng: &mut R, probability: f64) -> bool
where
    R: RandomSource + ?Sized,
{
    rng.next_f64() < probability
}

/// A deterministic [`RandomSource`] for when problems need to be reproduced.
pub fn seeded(seed: u64) -> ChaCha8Rng { ChaCha8Rng::seed_from_u64(seed) }

/// A [`RandomSource`] which replays a fixed list of values, wrapping around
/// when it runs out.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Scripted {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty());
        Scripted {
            values: values.to_vec(),
            cursor: 0,
        }
    }

    /// The value which makes [`RandomSource::int_in_range()`] return `value`.
    pub(crate) fn picking(value: i64, lo: i64, hi: i64) -> f64 {
        let span = (hi - lo + 1) as f64;
        ((value - lo) as f64 + 0.5) / span
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
