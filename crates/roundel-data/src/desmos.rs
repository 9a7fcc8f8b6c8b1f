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

//! Desmos export.
//!
//! Renders a point set as text that can be pasted into the Desmos graphing
//! calculator: one `(x, y)` expression per line, in rank order, followed by
//! the circle `x^2 + y^2 = r^2` when a boundary was found. Every line of that
//! block is a plain expression.
//!
//! With the color key enabled, a second block follows after an empty line. It
//! lists each label symbol once, in order of first appearance by rank, with
//! its palette color (`A: red`), so the points can be colored by hand after
//! pasting. The key is for the reader and is not part of the paste.

use crate::palette::LabelColor;
use roundel_core::num::Coordinate;
use roundel_model::point_set::PointSet;
use roundel_scan::{ranking::RankedSequence, result::ScanResult};
use std::fmt::Write;

/// Formatter for Desmos expression lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesmosFormatter {
    labels: bool,
}

impl DesmosFormatter {
    /// Creates a formatter that emits the expressions only.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the label color key after the expressions.
    #[inline]
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Returns `true` if the color key is emitted.
    #[inline]
    pub fn labels(&self) -> bool {
        self.labels
    }

    /// Renders the circle through a boundary at `radius`.
    #[inline]
    pub fn circle_equation(&self, radius: f64) -> String {
        format!("x^2 + y^2 = {}^2", radius)
    }

    /// Writes one `(x, y)` line per point of `points` in the order given by
    /// `ranked`.
    pub fn write_ranked<W, T>(
        &self,
        out: &mut W,
        points: &PointSet<T>,
        ranked: &RankedSequence,
    ) -> std::fmt::Result
    where
        W: Write,
        T: Coordinate,
    {
        for (_, index, _) in ranked.iter() {
            writeln!(out, "{}", points.point(index))?;
        }
        Ok(())
    }

    /// Writes one `symbol: color` line per label present in `points`, in
    /// order of first appearance along `ranked`. Symbols outside the palette
    /// are listed as `none`.
    pub fn write_color_key<W, T>(
        &self,
        out: &mut W,
        points: &PointSet<T>,
        ranked: &RankedSequence,
    ) -> std::fmt::Result
    where
        W: Write,
        T: Coordinate,
    {
        let mut listed = vec![false; points.num_labels()];
        for (_, index, _) in ranked.iter() {
            let label = points.label(index);
            if std::mem::replace(&mut listed[label.get()], true) {
                continue;
            }

            let symbol = points.symbol(index);
            match LabelColor::for_symbol(symbol) {
                Some(color) => writeln!(out, "{}: {}", symbol, color)?,
                None => writeln!(out, "{}: none", symbol)?,
            }
        }
        Ok(())
    }

    /// Renders `points` in rank order, followed by the color key if enabled.
    pub fn format_points<T>(&self, points: &PointSet<T>) -> String
    where
        T: Coordinate,
    {
        self.render(points, None)
    }

    /// Renders `points` in rank order and the circle of `result`, if any,
    /// followed by the color key if enabled.
    pub fn format_result<T>(&self, points: &PointSet<T>, result: &ScanResult<T>) -> String
    where
        T: Coordinate,
    {
        self.render(points, result.radius())
    }

    fn render<T>(&self, points: &PointSet<T>, radius: Option<f64>) -> String
    where
        T: Coordinate,
    {
        let ranked = RankedSequence::from_points(points);
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_ranked(&mut out, points, &ranked);
        if let Some(radius) = radius {
            out.push_str(&self.circle_equation(radius));
            out.push('\n');
        }
        if self.labels && !points.is_empty() {
            out.push('\n');
            let _ = self.write_color_key(&mut out, points, &ranked);
        }
        out
    }
}
