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
    monitor::scan_monitor::ScanMonitor,
    result::{ScanOutcome, TerminationReason},
};
use roundel_core::num::Coordinate;
use roundel_model::{
    index::{LabelIndex, PointIndex},
    point_set::PointSet,
};

/// A monitor that ignores every event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl<T> ScanMonitor<T> for NoOperationMonitor
where
    T: Coordinate,
{
    #[inline(always)]
    fn on_enter_scan(&mut self, _points: &PointSet<T>) {}

    #[inline(always)]
    fn on_unique_label(&mut self, _rank: usize, _index: PointIndex, _label: LabelIndex) {}

    #[inline(always)]
    fn on_collision(
        &mut self,
        _rank: usize,
        _index: PointIndex,
        _label: LabelIndex,
        _reason: TerminationReason,
    ) {
    }

    #[inline(always)]
    fn on_exit_scan(&mut self, _outcome: &ScanOutcome<T>) {}

    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }
}
