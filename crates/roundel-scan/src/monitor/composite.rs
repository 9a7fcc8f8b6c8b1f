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

//! Monitoring combinator for the boundary scan
//!
//! `CompositeScanMonitor` forwards every event to its children in insertion
//! order, so logging and custom observers can be combined without coupling
//! them to the scanner.

use crate::{
    monitor::scan_monitor::ScanMonitor,
    ranking::RankedSequence,
    result::{ScanOutcome, TerminationReason},
};
use roundel_core::num::Coordinate;
use roundel_model::{
    index::{LabelIndex, PointIndex},
    point_set::PointSet,
};

/// A scan monitor that forwards events to all of its children.
pub struct CompositeScanMonitor<'a, T>
where
    T: Coordinate,
{
    monitors: Vec<Box<dyn ScanMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeScanMonitor<'a, T>
where
    T: Coordinate,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeScanMonitor<'a, T>
where
    T: Coordinate,
{
    /// Creates a new empty `CompositeScanMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: ScanMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn ScanMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of child monitors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if there are no child monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn ScanMonitor<T> + 'a>> for CompositeScanMonitor<'a, T>
where
    T: Coordinate,
{
    fn from_iter<I: IntoIterator<Item = Box<dyn ScanMonitor<T> + 'a>>>(iter: I) -> Self {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> ScanMonitor<T> for CompositeScanMonitor<'a, T>
where
    T: Coordinate,
{
    fn on_enter_scan(&mut self, points: &PointSet<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_scan(points);
        }
    }

    fn on_ranked(&mut self, ranked: &RankedSequence) {
        for monitor in &mut self.monitors {
            monitor.on_ranked(ranked);
        }
    }

    fn on_unique_label(&mut self, rank: usize, index: PointIndex, label: LabelIndex) {
        for monitor in &mut self.monitors {
            monitor.on_unique_label(rank, index, label);
        }
    }

    fn on_collision(
        &mut self,
        rank: usize,
        index: PointIndex,
        label: LabelIndex,
        reason: TerminationReason,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_collision(rank, index, label, reason);
        }
    }

    fn on_exit_scan(&mut self, outcome: &ScanOutcome<T>) {
        for monitor in &mut self.monitors {
            monitor.on_exit_scan(outcome);
        }
    }

    fn name(&self) -> &str {
        "CompositeScanMonitor"
    }
}

impl<'a, T> std::fmt::Debug for CompositeScanMonitor<'a, T>
where
    T: Coordinate,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeScanMonitor")
            .field("monitors", &self.monitors)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use roundel_model::alphabet::LabelAlphabet;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct Tagged {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl ScanMonitor<i64> for Tagged {
        fn on_enter_scan(&mut self, points: &PointSet<i64>) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:enter:{}", self.tag, points.len()));
        }

        fn on_unique_label(&mut self, rank: usize, _index: PointIndex, _label: LabelIndex) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:unique:{}", self.tag, rank));
        }

        fn on_collision(
            &mut self,
            rank: usize,
            _index: PointIndex,
            _label: LabelIndex,
            reason: TerminationReason,
        ) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:collision:{}:{:?}", self.tag, rank, reason));
        }

        fn on_exit_scan(&mut self, outcome: &ScanOutcome<i64>) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:exit:{}", self.tag, outcome.is_found()));
        }

        fn name(&self) -> &str {
            self.tag
        }
    }

    #[test]
    fn test_forwards_in_insertion_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut composite = CompositeScanMonitor::<i64>::new();
        composite.add_monitor(Tagged {
            tag: "a",
            log: Arc::clone(&log),
        });
        composite.add_monitor_boxed(Box::new(Tagged {
            tag: "b",
            log: Arc::clone(&log),
        }));
        assert_eq!(composite.len(), 2);

        let points = PointSet::from_records(LabelAlphabet::letters(1), [((1i64, 1), 'A')]).unwrap();
        composite.on_enter_scan(&points);
        composite.on_unique_label(0, PointIndex::new(0), LabelIndex::new(0));
        composite.on_collision(
            1,
            PointIndex::new(1),
            LabelIndex::new(0),
            TerminationReason::NoSafeBoundary,
        );

        let log = log.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                "a:enter:1",
                "b:enter:1",
                "a:unique:0",
                "b:unique:0",
                "a:collision:1:NoSafeBoundary",
                "b:collision:1:NoSafeBoundary",
            ]
        );
    }

    #[test]
    fn test_from_iter_and_debug() {
        let composite: CompositeScanMonitor<'_, i32> = vec![
            Box::new(NoOperationMonitor::new()) as Box<dyn ScanMonitor<i32>>,
            Box::new(NoOperationMonitor::new()),
        ]
        .into_iter()
        .collect();

        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());
        let dbg = format!("{:?}", composite);
        assert!(dbg.contains("ScanMonitor(NoOperationMonitor)"));
    }
}
