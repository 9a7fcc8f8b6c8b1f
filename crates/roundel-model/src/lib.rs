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

//! # Roundel Model
//!
//! **The domain model for the largest distinct-label circle problem.**
//!
//! A problem instance is a finite, ordered set of integer points, each tagged
//! with a label drawn from a small alphabet. This crate defines that instance
//! and the ways to build it; the ranking and scanning live in `roundel_scan`.
//!
//! ## Architecture
//!
//! * **`index`**: strongly typed `PointIndex` and `LabelIndex`.
//! * **`alphabet`**: `LabelAlphabet`, the ordered set of label symbols, and the
//!   errors raised when symbols are malformed or unknown.
//! * **`point_set`**: the immutable `PointSet` (parallel arrays of points and
//!   labels) and its `PointSetBuilder`.
//! * **`loading`**: `PointSetLoader`, a text reader for `x y label` records.
//!
//! ## Design Philosophy
//!
//! 1.  **Insertion order is data**: points with equal magnitude are ranked in
//!     the order they were added, so the builder and the loader preserve it.
//! 2.  **Fail-fast**: a label outside the alphabet is rejected when the point is
//!     added, never discovered later by the scanner.

pub mod alphabet;
pub mod index;
pub mod loading;
pub mod point_set;
