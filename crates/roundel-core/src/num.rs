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

//! # Coordinate Numeric Trait
//!
//! `Coordinate` collects the bounds required from a point coordinate type:
//! signed primitive integers that widen losslessly into `i64`. The widening is
//! what allows squared norms to be computed exactly in `u128` for every
//! supported type, so ranking never has to compare rounded distances.
//!
//! Implemented for `i8`, `i16`, `i32` and `i64`.

use num_traits::{PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for integer types usable as point coordinates.
pub trait Coordinate:
    PrimInt
    + Signed
    + Into<i64>
    + Hash
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
}

impl<T> Coordinate for T where
    T: PrimInt
        + Signed
        + Into<i64>
        + Hash
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    fn widen<T: Coordinate>(value: T) -> i64 {
        value.into()
    }

    #[test]
    fn test_signed_primitives_are_coordinates() {
        assert_eq!(widen(-3i8), -3);
        assert_eq!(widen(300i16), 300);
        assert_eq!(widen(i32::MIN), i32::MIN as i64);
        assert_eq!(widen(i64::MAX), i64::MAX);
    }
}
