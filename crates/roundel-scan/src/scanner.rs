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

//! # Boundary Scanner
//!
//! Finds the furthest point of a ranked point set that can be enclosed by an
//! origin-centered circle before any label repeats.
//!
//! ## Algorithm
//!
//! One pass over the rank order. A bitset keyed by `LabelIndex` records the
//! labels seen so far, and the rank of the last point whose label was new is
//! remembered as the *last valid point*. The first point whose label was
//! already seen stops the scan and is resolved by three ordered rules:
//!
//! 1. Its distance differs from the last valid point's: the last valid point
//!    is the boundary (`DistinctMagnitudeCollision`).
//! 2. Same distance, and the point one rank earlier carries the same label:
//!    step back to rank `i - 2` if `i >= 2` (`StepBack`).
//! 3. Otherwise there is no boundary (`NoSafeBoundary`).
//!
//! If no label repeats, the last point is the boundary (`Exhausted`); an
//! empty set has none (`EmptyInput`). Distances are compared as exact squared
//! norms.
//!
//! The scanner owns its rank buffer and bitset so repeated scans do not
//! reallocate; no other state survives between scans.

use crate::{
    monitor::{no_op::NoOperationMonitor, scan_monitor::ScanMonitor},
    ranking::RankedSequence,
    result::{Boundary, ScanOutcome, ScanResult, TerminationReason},
    stats::ScanStatisticsBuilder,
};
use fixedbitset::FixedBitSet;
use roundel_core::num::Coordinate;
use roundel_model::point_set::PointSet;
use std::time::Instant;

/// Finds the boundary of `points` without observing the scan.
///
/// # Examples
///
/// ```rust
/// # use roundel_model::{alphabet::LabelAlphabet, point_set::PointSet};
/// # use roundel_scan::scanner::find_furthest_valid_point;
///
/// // Both points lie at distance sqrt(5) and share a label.
/// let points = PointSet::<i64>::from_records(
///     LabelAlphabet::letters(1),
///     [((1, 2), 'A'), ((2, 1), 'A')],
/// )
/// .unwrap();
/// assert!(!find_furthest_valid_point(&points).is_found());
/// ```
pub fn find_furthest_valid_point<T>(points: &PointSet<T>) -> ScanResult<T>
where
    T: Coordinate,
{
    BoundaryScanner::preallocated(points.len(), points.num_labels())
        .scan(points, &mut NoOperationMonitor::new())
        .into_result()
}

/// Reusable boundary scanner.
#[derive(Debug, Clone, Default)]
pub struct BoundaryScanner {
    ranked: RankedSequence,
    seen: FixedBitSet,
}

impl BoundaryScanner {
    /// Creates a scanner with empty buffers.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scanner sized for `num_points` points over `num_labels` labels.
    #[inline]
    pub fn preallocated(num_points: usize, num_labels: usize) -> Self {
        Self {
            ranked: RankedSequence::with_capacity(num_points),
            seen: FixedBitSet::with_capacity(num_labels),
        }
    }

    /// Ranks `points` and scans them.
    pub fn scan<T, M>(&mut self, points: &PointSet<T>, monitor: &mut M) -> ScanOutcome<T>
    where
        T: Coordinate,
        M: ScanMonitor<T> + ?Sized,
    {
        let start = Instant::now();
        monitor.on_enter_scan(points);

        let mut ranked = std::mem::take(&mut self.ranked);
        ranked.rank(points);
        monitor.on_ranked(&ranked);

        let outcome = self.run(points, &ranked, monitor, start);
        self.ranked = ranked;
        outcome
    }

    /// Scans `points` along an existing rank order.
    ///
    /// # Panics
    ///
    /// Panics if `ranked` does not have one entry per point.
    pub fn scan_ranked<T, M>(
        &mut self,
        points: &PointSet<T>,
        ranked: &RankedSequence,
        monitor: &mut M,
    ) -> ScanOutcome<T>
    where
        T: Coordinate,
        M: ScanMonitor<T> + ?Sized,
    {
        assert_eq!(
            ranked.len(),
            points.len(),
            "called `BoundaryScanner::scan_ranked` with a rank order of length {} for {} points",
            ranked.len(),
            points.len()
        );

        let start = Instant::now();
        monitor.on_enter_scan(points);
        monitor.on_ranked(ranked);
        self.run(points, ranked, monitor, start)
    }

    fn run<T, M>(
        &mut self,
        points: &PointSet<T>,
        ranked: &RankedSequence,
        monitor: &mut M,
        start: Instant,
    ) -> ScanOutcome<T>
    where
        T: Coordinate,
        M: ScanMonitor<T> + ?Sized,
    {
        self.seen.clear();
        self.seen.grow(points.num_labels());

        let mut last_valid: Option<usize> = None;
        let mut scanned = 0usize;

        let (result, reason) = 'scan: {
            for rank in 0..ranked.len() {
                scanned += 1;
                let index = ranked.point_index(rank);
                let label = points.label(index);

                if !self.seen.put(label.get()) {
                    last_valid = Some(rank);
                    monitor.on_unique_label(rank, index, label);
                    continue;
                }

                let (result, reason) = resolve_collision(points, ranked, rank, last_valid);
                monitor.on_collision(rank, index, label, reason);
                break 'scan (result, reason);
            }

            match last_valid {
                Some(rank) => (
                    ScanResult::Found(boundary_at(points, ranked, rank)),
                    TerminationReason::Exhausted,
                ),
                None => (ScanResult::NoValidSolution, TerminationReason::EmptyInput),
            }
        };

        let statistics = ScanStatisticsBuilder::new()
            .points_ranked(ranked.len())
            .points_scanned(scanned)
            .distinct_labels(self.seen.count_ones(..))
            .scan_duration(start.elapsed())
            .build();

        let outcome = ScanOutcome::new(result, reason, statistics);
        monitor.on_exit_scan(&outcome);
        outcome
    }
}

/// Resolves the boundary once the point at `rank` repeats a seen label.
fn resolve_collision<T>(
    points: &PointSet<T>,
    ranked: &RankedSequence,
    rank: usize,
    last_valid: Option<usize>,
) -> (ScanResult<T>, TerminationReason)
where
    T: Coordinate,
{
    // A repeated label implies an earlier admitted point.
    let Some(last) = last_valid else {
        return (ScanResult::NoValidSolution, TerminationReason::NoSafeBoundary);
    };

    if ranked.squared_norm(rank) != ranked.squared_norm(last) {
        return (
            ScanResult::Found(boundary_at(points, ranked, last)),
            TerminationReason::DistinctMagnitudeCollision,
        );
    }

    if rank >= 2 {
        let previous = points.label(ranked.point_index(rank - 1));
        let current = points.label(ranked.point_index(rank));
        if previous == current {
            return (
                ScanResult::Found(boundary_at(points, ranked, rank - 2)),
                TerminationReason::StepBack,
            );
        }
    }

    (ScanResult::NoValidSolution, TerminationReason::NoSafeBoundary)
}

#[inline]
fn boundary_at<T>(points: &PointSet<T>, ranked: &RankedSequence, rank: usize) -> Boundary<T>
where
    T: Coordinate,
{
    let index = ranked.point_index(rank);
    Boundary::new(index, rank, points.point(index), points.label(index))
}
