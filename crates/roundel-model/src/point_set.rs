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

use crate::{
    alphabet::{LabelAlphabet, UnknownLabelError},
    index::{LabelIndex, PointIndex},
};
use roundel_core::{geometry::Point, num::Coordinate};

/// The immutable problem instance: an ordered sequence of labeled points.
///
/// Points and labels are stored as parallel arrays indexed by `PointIndex`.
/// The index is the insertion order, which is also the tie-break order for
/// points of equal magnitude. Coordinates and labels may repeat freely.
///
/// Construction goes through `PointSetBuilder`, which guarantees that every
/// stored label is in range of the alphabet.
#[derive(Clone, PartialEq, Eq)]
pub struct PointSet<T> {
    points: Vec<Point<T>>,
    labels: Vec<LabelIndex>,
    alphabet: LabelAlphabet,
}

impl<T> PointSet<T>
where
    T: Coordinate,
{
    /// Builds a point set from `((x, y), symbol)` records.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roundel_model::alphabet::LabelAlphabet;
    /// # use roundel_model::point_set::PointSet;
    ///
    /// let set = PointSet::<i64>::from_records(
    ///     LabelAlphabet::letters(2),
    ///     [((1, 2), 'A'), ((2, 1), 'B')],
    /// )
    /// .unwrap();
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_records<I>(alphabet: LabelAlphabet, records: I) -> Result<Self, UnknownLabelError>
    where
        I: IntoIterator<Item = ((T, T), char)>,
    {
        let records = records.into_iter();
        let mut builder = PointSetBuilder::with_capacity(alphabet, records.size_hint().0);
        for (coordinates, symbol) in records {
            builder.add_labeled(coordinates.into(), symbol)?;
        }
        Ok(builder.build())
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the label alphabet.
    #[inline]
    pub fn alphabet(&self) -> &LabelAlphabet {
        &self.alphabet
    }

    /// Returns the number of symbols in the label alphabet.
    #[inline]
    pub fn num_labels(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn point(&self, index: PointIndex) -> Point<T> {
        let i = index.get();
        debug_assert!(
            i < self.len(),
            "called `PointSet::point` with point index out of bounds: the len is {} but the index is {}",
            self.len(),
            i
        );
        self.points[i]
    }

    /// Returns the label of the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn label(&self, index: PointIndex) -> LabelIndex {
        let i = index.get();
        debug_assert!(
            i < self.len(),
            "called `PointSet::label` with point index out of bounds: the len is {} but the index is {}",
            self.len(),
            i
        );
        self.labels[i]
    }

    /// Returns the label symbol of the point at `index`.
    #[inline]
    pub fn symbol(&self, index: PointIndex) -> char {
        self.alphabet.symbol(self.label(index))
    }

    /// Returns all points in insertion order.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Returns all labels in insertion order.
    #[inline]
    pub fn labels(&self) -> &[LabelIndex] {
        &self.labels
    }

    /// Iterates over `(PointIndex, Point, LabelIndex)` in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (PointIndex, Point<T>, LabelIndex)> + '_ {
        self.points
            .iter()
            .zip(self.labels.iter())
            .enumerate()
            .map(|(i, (&p, &l))| (PointIndex::new(i), p, l))
    }

    /// Returns `true` if no label occurs on more than one point.
    pub fn has_distinct_labels(&self) -> bool {
        let mut seen = vec![false; self.num_labels()];
        for label in &self.labels {
            let slot = &mut seen[label.get()];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }
}

impl<T> std::fmt::Debug for PointSet<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointSet")
            .field("points", &self.points)
            .field("labels", &self.labels)
            .field("alphabet", &self.alphabet)
            .finish()
    }
}

impl<T> std::fmt::Display for PointSet<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Point Set")?;
        writeln!(f, "   Points: {}", self.len())?;
        writeln!(f, "   Labels: {}", self.alphabet)?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "   (No points)")?;
            return Ok(());
        }

        writeln!(f, "   {:<8} | {:<16} | {:<5}", "Index", "Point", "Label")?;
        writeln!(f, "   {:-<8}-+-{:-<16}-+-{:-<5}", "", "", "")?;
        for (index, point, label) in self.iter() {
            writeln!(
                f,
                "   {:<8} | {:<16} | {:<5}",
                index.get(),
                point.to_string(),
                self.alphabet.symbol(label)
            )?;
        }
        Ok(())
    }
}

/// Mutable builder for `PointSet`.
#[derive(Clone)]
pub struct PointSetBuilder<T> {
    points: Vec<Point<T>>,
    labels: Vec<LabelIndex>,
    alphabet: LabelAlphabet,
}

impl<T> PointSetBuilder<T>
where
    T: Coordinate,
{
    /// Creates an empty builder over `alphabet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use roundel_core::geometry::Point;
    /// # use roundel_model::alphabet::LabelAlphabet;
    /// # use roundel_model::point_set::PointSetBuilder;
    ///
    /// let mut builder = PointSetBuilder::<i32>::new(LabelAlphabet::letters(3));
    /// builder
    ///     .add_labeled(Point::new(0, 0), 'A')
    ///     .unwrap()
    ///     .add_labeled(Point::new(1, 0), 'C')
    ///     .unwrap();
    /// let set = builder.build();
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.num_labels(), 3);
    /// ```
    #[inline]
    pub fn new(alphabet: LabelAlphabet) -> Self {
        Self::with_capacity(alphabet, 0)
    }

    /// Creates an empty builder with room for `capacity` points.
    #[inline]
    pub fn with_capacity(alphabet: LabelAlphabet, capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
            alphabet,
        }
    }

    /// Returns the number of points added so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point was added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the alphabet of the set under construction.
    #[inline]
    pub fn alphabet(&self) -> &LabelAlphabet {
        &self.alphabet
    }

    /// Appends a point with the given label.
    ///
    /// # Panics
    ///
    /// Panics if `label` is not in range of the alphabet.
    pub fn add_point(&mut self, point: Point<T>, label: LabelIndex) -> &mut Self {
        assert!(
            self.alphabet.contains(label),
            "called `PointSetBuilder::add_point` with label index out of bounds: the alphabet has {} symbols but the index is {}",
            self.alphabet.len(),
            label.get()
        );

        self.points.push(point);
        self.labels.push(label);
        self
    }

    /// Appends a point labeled by `symbol`.
    ///
    /// Returns an error, leaving the builder unchanged, if `symbol` is not in
    /// the alphabet.
    pub fn add_labeled(
        &mut self,
        point: Point<T>,
        symbol: char,
    ) -> Result<&mut Self, UnknownLabelError> {
        let label = self.alphabet.try_index_of(symbol)?;
        Ok(self.add_point(point, label))
    }

    /// Finalizes the point set.
    pub fn build(self) -> PointSet<T> {
        debug_assert_eq!(self.points.len(), self.labels.len());
        PointSet {
            points: self.points,
            labels: self.labels,
            alphabet: self.alphabet,
        }
    }
}

impl<T> std::fmt::Debug for PointSetBuilder<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointSetBuilder")
            .field("points", &self.points)
            .field("labels", &self.labels)
            .field("alphabet", &self.alphabet)
            .finish()
    }
}

impl<T> std::fmt::Display for PointSetBuilder<T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PointSetBuilder(num_points: {}, num_labels: {})",
            self.len(),
            self.alphabet.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi(i: usize) -> PointIndex {
        PointIndex::new(i)
    }

    fn li(i: usize) -> LabelIndex {
        LabelIndex::new(i)
    }

    #[test]
    fn test_builder_preserves_insertion_order() {
        let mut builder = PointSetBuilder::<i64>::new(LabelAlphabet::letters(3));
        builder
            .add_point(Point::new(5, 0), li(2))
            .add_point(Point::new(0, 0), li(0))
            .add_point(Point::new(5, 0), li(2));
        assert_eq!(builder.len(), 3);

        let set = builder.build();
        assert_eq!(set.len(), 3);
        assert_eq!(set.point(pi(0)), Point::new(5, 0));
        assert_eq!(set.point(pi(1)), Point::origin());
        assert_eq!(set.label(pi(2)), li(2));
        assert_eq!(set.symbol(pi(0)), 'C');
    }

    #[test]
    #[should_panic(expected = "label index out of bounds")]
    fn test_add_point_rejects_foreign_label() {
        let mut builder = PointSetBuilder::<i64>::new(LabelAlphabet::letters(2));
        builder.add_point(Point::new(1, 1), li(2));
    }

    #[test]
    fn test_add_labeled_unknown_symbol_leaves_builder_unchanged() {
        let mut builder = PointSetBuilder::<i32>::new(LabelAlphabet::letters(2));
        let err = builder.add_labeled(Point::new(1, 1), 'Z').unwrap_err();
        assert_eq!(err.symbol, 'Z');
        assert!(builder.is_empty());
    }

    #[test]
    fn test_from_records() {
        let set = PointSet::<i64>::from_records(
            LabelAlphabet::letters(3),
            [((0, 0), 'A'), ((1, 0), 'B'), ((0, 2), 'A')],
        )
        .unwrap();

        let labels: Vec<char> = set.iter().map(|(i, _, _)| set.symbol(i)).collect();
        assert_eq!(labels, vec!['A', 'B', 'A']);
        assert_eq!(set.points()[2], Point::new(0, 2));
        assert_eq!(set.labels(), &[li(0), li(1), li(0)]);
    }

    #[test]
    fn test_empty_point_set() {
        let set = PointSetBuilder::<i64>::new(LabelAlphabet::default()).build();
        assert!(set.is_empty());
        assert_eq!(set.num_labels(), 0);
        assert!(set.has_distinct_labels());
        assert_eq!(set.iter().len(), 0);
    }

    #[test]
    fn test_has_distinct_labels() {
        let distinct = PointSet::<i32>::from_records(
            LabelAlphabet::letters(3),
            [((3, 3), 'C'), ((1, 1), 'A')],
        )
        .unwrap();
        assert!(distinct.has_distinct_labels());

        let repeated = PointSet::<i32>::from_records(
            LabelAlphabet::letters(3),
            [((3, 3), 'C'), ((1, 1), 'A'), ((9, 9), 'C')],
        )
        .unwrap();
        assert!(!repeated.has_distinct_labels());
    }

    #[test]
    fn test_display_formatting_example() {
        let set = PointSet::<i64>::from_records(
            LabelAlphabet::letters(2),
            [((1, -2), 'B'), ((0, 0), 'A')],
        )
        .unwrap();

        let mut expected = String::new();
        expected.push_str("Point Set\n");
        expected.push_str("   Points: 2\n");
        expected.push_str("   Labels: {A, B}\n");
        expected.push('\n');
        expected.push_str("   Index    | Point            | Label\n");
        expected.push_str("   ---------+------------------+------\n");
        expected.push_str("   0        | (1, -2)          | B    \n");
        expected.push_str("   1        | (0, 0)           | A    \n");

        assert_eq!(format!("{}", set), expected);
    }

    #[test]
    fn test_display_empty() {
        let set = PointSetBuilder::<i64>::new(LabelAlphabet::letters(1)).build();
        let rendered = format!("{}", set);
        assert!(rendered.contains("Points: 0"));
        assert!(rendered.contains("(No points)"));
    }

    #[test]
    fn test_builder_display() {
        let builder = PointSetBuilder::<i64>::new(LabelAlphabet::letters(4));
        assert_eq!(
            format!("{}", builder),
            "PointSetBuilder(num_points: 0, num_labels: 4)"
        );
    }
}
