// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Random point set generation.
//!
//! `RandomPointSetGenerator` draws `size` points with both coordinates sampled
//! uniformly from the half-open interval `[-m, m)`, where `m` is the larger
//! magnitude of the configured `low` and `high` bounds, so the cloud is always
//! centered on the origin. Labels are drawn uniformly from the alphabet.
//!
//! Randomness is always explicit: pass an `Rng` to `generate`, or a `u64` seed
//! to `generate_seeded`, which uses `ChaCha8Rng` and is reproducible across
//! platforms.

use rand::{Rng, SeedableRng, distr::uniform::SampleUniform};
use rand_chacha::ChaCha8Rng;
use roundel_core::{geometry::Point, num::Coordinate};
use roundel_model::{
    alphabet::LabelAlphabet,
    index::LabelIndex,
    point_set::{PointSet, PointSetBuilder},
};

/// Errors raised when a generator configuration cannot produce points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// The alphabet has no symbols to draw labels from.
    #[error("cannot draw labels from an empty alphabet")]
    EmptyAlphabet,
    /// Both bounds are zero, so the coordinate interval `[0, 0)` is empty.
    #[error("coordinate range [{low}, {high}) is empty")]
    EmptyRange { low: String, high: String },
}

/// Configurable generator for random labeled point sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPointSetGenerator<T> {
    low: T,
    high: T,
    size: usize,
    alphabet: LabelAlphabet,
}

impl<T> Default for RandomPointSetGenerator<T>
where
    T: Coordinate,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RandomPointSetGenerator<T>
where
    T: Coordinate,
{
    /// Creates a generator for 10 points in `[-10, 10)` labeled `A` to `F`.
    #[inline]
    pub fn new() -> Self {
        let ten = num_traits::cast(10u8).unwrap_or_else(T::max_value);
        Self {
            low: T::one(),
            high: ten,
            size: 10,
            alphabet: LabelAlphabet::letters(6),
        }
    }

    /// Sets the lower bound.
    #[inline]
    pub fn low(mut self, low: T) -> Self {
        self.low = low;
        self
    }

    /// Sets the upper bound.
    #[inline]
    pub fn high(mut self, high: T) -> Self {
        self.high = high;
        self
    }

    /// Sets the number of points to generate.
    #[inline]
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the alphabet labels are drawn from.
    #[inline]
    pub fn alphabet(mut self, alphabet: LabelAlphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Returns the configured number of points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.size
    }

    /// Returns the configured alphabet.
    #[inline]
    pub fn label_alphabet(&self) -> &LabelAlphabet {
        &self.alphabet
    }

    /// Returns the half-open coordinate interval `[-m, m)` points are drawn from.
    ///
    /// `m` saturates at `T::max_value()`, so `T::min_value()` as a bound does
    /// not overflow.
    #[inline]
    pub fn coordinate_range(&self) -> (T, T) {
        let magnitude = saturating_abs(self.low).max(saturating_abs(self.high));
        (-magnitude, magnitude)
    }
}

impl<T> RandomPointSetGenerator<T>
where
    T: Coordinate + SampleUniform,
{
    /// Generates a point set using `rng`.
    pub fn generate<R>(&self, rng: &mut R) -> Result<PointSet<T>, GeneratorError>
    where
        R: Rng,
    {
        if self.alphabet.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }

        let (low, high) = self.coordinate_range();
        if low >= high {
            return Err(GeneratorError::EmptyRange {
                low: low.to_string(),
                high: high.to_string(),
            });
        }

        let num_labels = self.alphabet.len();
        let mut builder = PointSetBuilder::with_capacity(self.alphabet.clone(), self.size);
        for _ in 0..self.size {
            let x = rng.random_range(low..high);
            let y = rng.random_range(low..high);
            let label = LabelIndex::new(rng.random_range(0..num_labels));
            builder.add_point(Point::new(x, y), label);
        }
        Ok(builder.build())
    }

    /// Generates a point set from a `ChaCha8Rng` seeded with `seed`.
    #[inline]
    pub fn generate_seeded(&self, seed: u64) -> Result<PointSet<T>, GeneratorError> {
        self.generate(&mut ChaCha8Rng::seed_from_u64(seed))
    }
}

#[inline]
fn saturating_abs<T>(value: T) -> T
where
    T: Coordinate,
{
    if value == T::min_value() {
        T::max_value()
    } else {
        value.abs()
    }
}
