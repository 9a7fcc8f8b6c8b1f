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

//! Ranking stage.
//!
//! Orders the points of a `PointSet` by non-decreasing distance from the
//! origin. The sort key is the exact squared norm (`u128`), so equal distances
//! compare equal and distinct distances never collapse through rounding. The
//! sort is stable: points at the same distance keep their insertion order.
//!
//! The squared norms are stored next to the order, rank by rank, so the
//! scanner can compare magnitudes without touching the points again.

use roundel_core::{geometry::Point, num::Coordinate};
use roundel_model::{index::PointIndex, point_set::PointSet};

/// The rank order of a point set.
///
/// `order[r]` is the point at rank `r`, and `squared_norms[r]` is its squared
/// distance from the origin. The sequence is a derived view and never
/// modifies the point set it was built from.
///
/// # Examples
///
/// ```rust
/// # use roundel_model::{alphabet::LabelAlphabet, point_set::PointSet};
/// # use roundel_scan::ranking::RankedSequence;
///
/// let points = PointSet::<i64>::from_records(
///     LabelAlphabet::letters(3),
///     [((0, 2), 'A'), ((2, 0), 'B'), ((1, 0), 'C')],
/// )
/// .unwrap();
///
/// let ranked = RankedSequence::from_points(&points);
/// let order: Vec<usize> = ranked.order().iter().map(|i| i.get()).collect();
/// assert_eq!(order, vec![2, 0, 1]);
/// assert_eq!(ranked.squared_norms(), &[1, 4, 4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedSequence {
    order: Vec<PointIndex>,
    squared_norms: Vec<u128>,
}

impl RankedSequence {
    /// Creates an empty sequence.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence with room for `capacity` points.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            squared_norms: Vec::with_capacity(capacity),
        }
    }

    /// Ranks `points` into a new sequence.
    pub fn from_points<T>(points: &PointSet<T>) -> Self
    where
        T: Coordinate,
    {
        let mut ranked = Self::with_capacity(points.len());
        ranked.rank(points);
        ranked
    }

    /// Re-ranks in place, replacing the previous contents and reusing the
    /// allocated buffers.
    pub fn rank<T>(&mut self, points: &PointSet<T>)
    where
        T: Coordinate,
    {
        let norms: Vec<u128> = points.points().iter().map(Point::squared_norm).collect();

        self.order.clear();
        self.order.extend((0..points.len()).map(PointIndex::new));
        // `sort_by_key` is stable.
        self.order.sort_by_key(|index| norms[index.get()]);

        self.squared_norms.clear();
        self.squared_norms
            .extend(self.order.iter().map(|index| norms[index.get()]));
    }

    /// Returns the number of ranked points.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no point is ranked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the point at `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= self.len()`.
    #[inline]
    pub fn point_index(&self, rank: usize) -> PointIndex {
        self.order[rank]
    }

    /// Returns the squared distance from the origin of the point at `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= self.len()`.
    #[inline]
    pub fn squared_norm(&self, rank: usize) -> u128 {
        self.squared_norms[rank]
    }

    /// Returns the rank order.
    #[inline]
    pub fn order(&self) -> &[PointIndex] {
        &self.order
    }

    /// Returns the squared norms in rank order.
    #[inline]
    pub fn squared_norms(&self) -> &[u128] {
        &self.squared_norms
    }

    /// Iterates over `(rank, PointIndex, squared_norm)`.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, PointIndex, u128)> + '_ {
        self.order
            .iter()
            .zip(self.squared_norms.iter())
            .enumerate()
            .map(|(rank, (&index, &norm))| (rank, index, norm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundel_model::alphabet::LabelAlphabet;

    fn set(records: &[((i64, i64), char)]) -> PointSet<i64> {
        PointSet::from_records(LabelAlphabet::letters(6), records.iter().copied()).unwrap()
    }

    fn order_of(ranked: &RankedSequence) -> Vec<usize> {
        ranked.order().iter().map(|i| i.get()).collect()
    }

    #[test]
    fn test_empty_input() {
        let ranked = RankedSequence::from_points(&set(&[]));
        assert!(ranked.is_empty());
        assert_eq!(ranked.len(), 0);
        assert_eq!(ranked.iter().len(), 0);
    }

    #[test]
    fn test_orders_by_distance() {
        let points = set(&[
            ((5, 5), 'A'),
            ((0, 0), 'B'),
            ((-3, 0), 'C'),
            ((1, 1), 'D'),
        ]);
        let ranked = RankedSequence::from_points(&points);
        assert_eq!(order_of(&ranked), vec![1, 3, 2, 0]);
        assert_eq!(ranked.squared_norms(), &[0, 2, 9, 50]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        // All four points lie on the circle of radius 5.
        let points = set(&[
            ((0, -5), 'A'),
            ((3, 4), 'B'),
            ((-4, 3), 'C'),
            ((5, 0), 'D'),
        ]);
        let ranked = RankedSequence::from_points(&points);
        assert_eq!(order_of(&ranked), vec![0, 1, 2, 3]);
        assert!(ranked.squared_norms().iter().all(|&n| n == 25));
    }

    #[test]
    fn test_does_not_mutate_points() {
        let points = set(&[((9, 0), 'A'), ((1, 0), 'B')]);
        let before = points.clone();
        let _ = RankedSequence::from_points(&points);
        assert_eq!(points, before);
    }

    #[test]
    fn test_rank_reuses_buffer() {
        let mut ranked = RankedSequence::with_capacity(8);
        ranked.rank(&set(&[((2, 0), 'A'), ((1, 0), 'B'), ((3, 0), 'C')]));
        assert_eq!(order_of(&ranked), vec![1, 0, 2]);

        ranked.rank(&set(&[((4, 4), 'A')]));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked.point_index(0), PointIndex::new(0));
        assert_eq!(ranked.squared_norm(0), 32);
    }

    #[test]
    fn test_large_coordinates_rank_exactly() {
        // sqrt of these squared norms is identical in f64.
        let big = 3_037_000_499i64;
        let points = set(&[((big, 2), 'A'), ((big, 1), 'B')]);
        let ranked = RankedSequence::from_points(&points);
        assert_eq!(order_of(&ranked), vec![1, 0]);
        assert_ne!(ranked.squared_norm(0), ranked.squared_norm(1));
    }

    #[test]
    fn test_iter_yields_ranks() {
        let points = set(&[((0, 3), 'A'), ((0, 1), 'B')]);
        let ranked = RankedSequence::from_points(&points);
        let items: Vec<(usize, usize, u128)> =
            ranked.iter().map(|(r, i, n)| (r, i.get(), n)).collect();
        assert_eq!(items, vec![(0, 1, 1), (1, 0, 9)]);
    }
}
