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

//! # Roundel Scan
//!
//! The selection algorithm for the largest origin-centered circle whose
//! enclosed points carry pairwise distinct labels.
//!
//! ## Pipeline
//!
//! 1. **Ranking** (`ranking`): points are ordered by exact squared distance
//!    from the origin, ties kept in insertion order.
//! 2. **Boundary scan** (`scanner`): a single pass over the ranked points that
//!    stops at the first repeated label and resolves the boundary with two
//!    tie-break rules.
//! 3. **Radius**: derived from the boundary point (`result::Boundary::radius`).
//!
//! ## Modules
//!
//! - `ranking`: `RankedSequence`, the rank order plus parallel squared norms.
//! - `scanner`: `BoundaryScanner` and the `find_furthest_valid_point` shortcut.
//! - `result`: `ScanResult`, `Boundary`, `TerminationReason`, `ScanOutcome`.
//! - `stats`: `ScanStatistics` and its builder.
//! - `monitor`: observation hooks (`ScanMonitor`) with no-op, `tracing` and
//!   composite implementations.
//!
//! ## Usage
//!
//! ```rust
//! use roundel_model::{alphabet::LabelAlphabet, point_set::PointSet};
//! use roundel_scan::scanner::find_furthest_valid_point;
//!
//! let points = PointSet::<i64>::from_records(
//!     LabelAlphabet::letters(2),
//!     [((0, 0), 'A'), ((1, 0), 'B'), ((0, 2), 'A')],
//! )
//! .unwrap();
//!
//! let result = find_furthest_valid_point(&points);
//! assert_eq!(result.radius(), Some(1.0));
//! ```

pub mod monitor;
pub mod ranking;
pub mod result;
pub mod scanner;
pub mod stats;
