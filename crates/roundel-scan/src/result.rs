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

use crate::stats::ScanStatistics;
use roundel_core::{geometry::Point, num::Coordinate};
use roundel_model::index::{LabelIndex, PointIndex};

/// The furthest point that can be enclosed before a label repeats.
///
/// Carries both the insertion position of the point in its set and its rank in
/// the distance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary<T> {
    point_index: PointIndex,
    rank: usize,
    point: Point<T>,
    label: LabelIndex,
}

impl<T> Boundary<T>
where
    T: Coordinate,
{
    /// Constructs a new `Boundary`.
    #[inline]
    pub fn new(point_index: PointIndex, rank: usize, point: Point<T>, label: LabelIndex) -> Self {
        Self {
            point_index,
            rank,
            point,
            label,
        }
    }

    /// Returns the position of the boundary point in its point set.
    #[inline]
    pub fn point_index(&self) -> PointIndex {
        self.point_index
    }

    /// Returns the rank of the boundary point in the distance order.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the boundary point.
    #[inline]
    pub fn point(&self) -> Point<T> {
        self.point
    }

    /// Returns the label of the boundary point.
    #[inline]
    pub fn label(&self) -> LabelIndex {
        self.label
    }

    /// Returns the radius `sqrt(x² + y²)` of the circle through the boundary.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.point.radius()
    }
}

impl<T> std::fmt::Display for Boundary<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at rank {} (radius {:.6})",
            self.point,
            self.rank,
            self.radius()
        )
    }
}

/// The result of one boundary scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanResult<T> {
    /// A boundary exists; every label inside or on its circle is distinct.
    Found(Boundary<T>),
    /// No point can bound a circle with distinct labels. This covers the
    /// empty input and same-distance collisions with nothing to fall back to.
    NoValidSolution,
}

impl<T> ScanResult<T>
where
    T: Coordinate,
{
    /// Returns `true` if a boundary was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, ScanResult::Found(_))
    }

    /// Returns the boundary, if any.
    #[inline]
    pub fn boundary(&self) -> Option<&Boundary<T>> {
        match self {
            ScanResult::Found(boundary) => Some(boundary),
            ScanResult::NoValidSolution => None,
        }
    }

    /// Returns the boundary point, if any.
    #[inline]
    pub fn point(&self) -> Option<Point<T>> {
        self.boundary().map(Boundary::point)
    }

    /// Returns the circle radius, if a boundary was found.
    #[inline]
    pub fn radius(&self) -> Option<f64> {
        self.boundary().map(Boundary::radius)
    }

    /// Returns the boundary.
    ///
    /// # Panics
    ///
    /// Panics if the result is `NoValidSolution`.
    #[inline]
    pub fn unwrap_found(self) -> Boundary<T> {
        match self {
            ScanResult::Found(boundary) => boundary,
            ScanResult::NoValidSolution => {
                panic!("called `ScanResult::unwrap_found()` on a `NoValidSolution` value")
            }
        }
    }
}

impl<T> std::fmt::Display for ScanResult<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanResult::Found(boundary) => write!(f, "Found({})", boundary),
            ScanResult::NoValidSolution => write!(f, "NoValidSolution"),
        }
    }
}

/// Why the scan stopped where it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// Every point was admitted; the boundary is the furthest point.
    Exhausted,
    /// The point set was empty.
    EmptyInput,
    /// A label repeated further out than the last admitted point, which
    /// becomes the boundary.
    DistinctMagnitudeCollision,
    /// A label repeated at the distance of the last admitted point, which
    /// carries the same label; the boundary steps back two ranks.
    StepBack,
    /// A label repeated at the distance of the last admitted point and there
    /// is no safe point to step back to.
    NoSafeBoundary,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Exhausted => write!(f, "All Labels Distinct"),
            TerminationReason::EmptyInput => write!(f, "Empty Input"),
            TerminationReason::DistinctMagnitudeCollision => {
                write!(f, "Collision Beyond Boundary")
            }
            TerminationReason::StepBack => write!(f, "Collision On Boundary (Stepped Back)"),
            TerminationReason::NoSafeBoundary => write!(f, "Collision On Boundary (No Fallback)"),
        }
    }
}

/// A scan result together with its termination reason and statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome<T> {
    result: ScanResult<T>,
    reason: TerminationReason,
    statistics: ScanStatistics,
}

impl<T> ScanOutcome<T>
where
    T: Coordinate,
{
    #[inline]
    pub fn new(result: ScanResult<T>, reason: TerminationReason, statistics: ScanStatistics) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn result(&self) -> &ScanResult<T> {
        &self.result
    }

    #[inline]
    pub fn reason(&self) -> TerminationReason {
        self.reason
    }

    #[inline]
    pub fn statistics(&self) -> &ScanStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.result.is_found()
    }

    #[inline]
    pub fn into_result(self) -> ScanResult<T> {
        self.result
    }
}

impl<T> std::fmt::Display for ScanOutcome<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Scan Outcome:")?;
        writeln!(f, "  Result: {}", self.result)?;
        writeln!(f, "  Termination: {}", self.reason)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ScanStatisticsBuilder;

    fn boundary(x: i64, y: i64) -> Boundary<i64> {
        Boundary::new(PointIndex::new(4), 2, Point::new(x, y), LabelIndex::new(1))
    }

    #[test]
    fn test_boundary_accessors() {
        let b = boundary(3, 4);
        assert_eq!(b.point_index(), PointIndex::new(4));
        assert_eq!(b.rank(), 2);
        assert_eq!(b.point(), Point::new(3, 4));
        assert_eq!(b.label(), LabelIndex::new(1));
        assert!((b.radius() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_found_result_accessors() {
        let result = ScanResult::Found(boundary(1, 0));
        assert!(result.is_found());
        assert_eq!(result.point(), Some(Point::new(1, 0)));
        assert_eq!(result.radius(), Some(1.0));
        assert_eq!(result.unwrap_found().rank(), 2);
    }

    #[test]
    fn test_no_valid_solution_accessors() {
        let result = ScanResult::<i64>::NoValidSolution;
        assert!(!result.is_found());
        assert!(result.boundary().is_none());
        assert!(result.point().is_none());
        assert!(result.radius().is_none());
    }

    #[test]
    #[should_panic(expected = "on a `NoValidSolution` value")]
    fn test_unwrap_found_panics_without_boundary() {
        let _ = ScanResult::<i64>::NoValidSolution.unwrap_found();
    }

    #[test]
    fn test_result_display() {
        assert_eq!(
            format!("{}", ScanResult::Found(boundary(1, 0))),
            "Found((1, 0) at rank 2 (radius 1.000000))"
        );
        assert_eq!(
            format!("{}", ScanResult::<i32>::NoValidSolution),
            "NoValidSolution"
        );
    }

    #[test]
    fn test_outcome_display_lists_all_parts() {
        let stats = ScanStatisticsBuilder::new()
            .points_ranked(3)
            .points_scanned(3)
            .distinct_labels(2)
            .build();
        let outcome = ScanOutcome::new(
            ScanResult::Found(boundary(1, 0)),
            TerminationReason::DistinctMagnitudeCollision,
            stats,
        );

        let rendered = format!("{}", outcome);
        assert!(rendered.starts_with("Scan Outcome:\n"));
        assert!(rendered.contains("Result: Found((1, 0)"));
        assert!(rendered.contains("Termination: Collision Beyond Boundary"));
        assert!(rendered.contains("Points Scanned: 3"));
        assert!(outcome.is_found());
        assert_eq!(outcome.reason(), TerminationReason::DistinctMagnitudeCollision);
        assert_eq!(outcome.statistics().distinct_labels, 2);
    }
}
