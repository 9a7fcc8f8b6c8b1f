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
    ranking::RankedSequence,
    result::{ScanOutcome, ScanResult, TerminationReason},
};
use roundel_core::num::Coordinate;
use roundel_model::{
    index::{LabelIndex, PointIndex},
    point_set::PointSet,
};

/// Emits `tracing` events for every step of a scan under the
/// `roundel::scan` target.
///
/// Scan start, collisions and the final outcome are logged at `INFO`, the
/// ranking and every admitted label at `DEBUG`.
#[derive(Debug, Clone, Default)]
pub struct LogMonitor {
    admitted: usize,
}

impl LogMonitor {
    /// Creates a new `LogMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of admitted labels seen in the current scan.
    #[inline]
    pub fn admitted(&self) -> usize {
        self.admitted
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(admitted: {})", self.admitted)
    }
}

impl<T> ScanMonitor<T> for LogMonitor
where
    T: Coordinate,
{
    fn on_enter_scan(&mut self, points: &PointSet<T>) {
        self.admitted = 0;
        tracing::info!(
            target: "roundel::scan",
            points = points.len(),
            labels = points.num_labels(),
            "scan started"
        );
    }

    fn on_ranked(&mut self, ranked: &RankedSequence) {
        tracing::debug!(
            target: "roundel::scan",
            points = ranked.len(),
            nearest = ranked.order().first().map(|i| i.get()),
            furthest = ranked.order().last().map(|i| i.get()),
            "points ranked by distance"
        );
    }

    fn on_unique_label(&mut self, rank: usize, index: PointIndex, label: LabelIndex) {
        self.admitted += 1;
        tracing::debug!(
            target: "roundel::scan",
            rank,
            point = index.get(),
            label = label.get(),
            "label admitted"
        );
    }

    fn on_collision(
        &mut self,
        rank: usize,
        index: PointIndex,
        label: LabelIndex,
        reason: TerminationReason,
    ) {
        tracing::info!(
            target: "roundel::scan",
            rank,
            point = index.get(),
            label = label.get(),
            %reason,
            "label repeated"
        );
    }

    fn on_exit_scan(&mut self, outcome: &ScanOutcome<T>) {
        let stats = outcome.statistics();
        match outcome.result() {
            ScanResult::Found(boundary) => tracing::info!(
                target: "roundel::scan",
                point = %boundary.point(),
                rank = boundary.rank(),
                radius = boundary.radius(),
                scanned = stats.points_scanned,
                elapsed_us = stats.scan_duration.as_micros() as u64,
                "boundary found"
            ),
            ScanResult::NoValidSolution => tracing::info!(
                target: "roundel::scan",
                reason = %outcome.reason(),
                scanned = stats.points_scanned,
                elapsed_us = stats.scan_duration.as_micros() as u64,
                "no valid solution"
            ),
        }
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}
