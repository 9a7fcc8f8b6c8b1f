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

use crate::{ranking::RankedSequence, result::ScanOutcome, result::TerminationReason};
use roundel_core::num::Coordinate;
use roundel_model::{
    index::{LabelIndex, PointIndex},
    point_set::PointSet,
};

/// Trait for observing a boundary scan.
pub trait ScanMonitor<T>: Send + Sync
where
    T: Coordinate,
{
    /// Called once before ranking begins.
    fn on_enter_scan(&mut self, points: &PointSet<T>);

    /// Called once the rank order is available.
    fn on_ranked(&mut self, _ranked: &RankedSequence) {}

    /// Called for every point whose label is seen for the first time.
    fn on_unique_label(&mut self, rank: usize, index: PointIndex, label: LabelIndex);

    /// Called when the point at `rank` repeats an already seen label, with the
    /// rule that resolved the boundary.
    fn on_collision(
        &mut self,
        rank: usize,
        index: PointIndex,
        label: LabelIndex,
        reason: TerminationReason,
    );

    /// Called when the scan is finished, whether a boundary was found or not.
    fn on_exit_scan(&mut self, outcome: &ScanOutcome<T>);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<'a, T> std::fmt::Debug for dyn ScanMonitor<T> + 'a
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScanMonitor({})", self.name())
    }
}

impl<'a, T> std::fmt::Display for dyn ScanMonitor<T> + 'a
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScanMonitor({})", self.name())
    }
}
