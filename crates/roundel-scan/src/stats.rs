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

/// Statistics collected during one boundary scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanStatistics {
    /// Number of points in the ranked sequence.
    pub points_ranked: usize,
    /// Number of ranks visited, including the rank that triggered a collision.
    pub points_scanned: usize,
    /// Number of distinct labels admitted before the scan stopped.
    pub distinct_labels: usize,
    /// Wall-clock duration of ranking and scanning.
    pub scan_duration: std::time::Duration,
}

impl std::fmt::Display for ScanStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Scan Statistics:")?;
        writeln!(f, "  Points Ranked: {}", self.points_ranked)?;
        writeln!(f, "  Points Scanned: {}", self.points_scanned)?;
        writeln!(f, "  Distinct Labels: {}", self.distinct_labels)?;
        writeln!(
            f,
            "  Scan Duration (secs): {:.6}",
            self.scan_duration.as_secs_f64()
        )
    }
}

/// Builder for `ScanStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanStatisticsBuilder {
    points_ranked: usize,
    points_scanned: usize,
    distinct_labels: usize,
    scan_duration: std::time::Duration,
}

impl Default for ScanStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanStatisticsBuilder {
    /// Creates a new `ScanStatisticsBuilder` with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self {
            points_ranked: 0,
            points_scanned: 0,
            distinct_labels: 0,
            scan_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of ranked points.
    #[inline]
    pub fn points_ranked(mut self, points_ranked: usize) -> Self {
        self.points_ranked = points_ranked;
        self
    }

    /// Sets the number of visited ranks.
    #[inline]
    pub fn points_scanned(mut self, points_scanned: usize) -> Self {
        self.points_scanned = points_scanned;
        self
    }

    /// Sets the number of admitted labels.
    #[inline]
    pub fn distinct_labels(mut self, distinct_labels: usize) -> Self {
        self.distinct_labels = distinct_labels;
        self
    }

    /// Sets the scan duration.
    #[inline]
    pub fn scan_duration(mut self, scan_duration: std::time::Duration) -> Self {
        self.scan_duration = scan_duration;
        self
    }

    /// Builds the `ScanStatistics` instance.
    #[inline]
    pub fn build(self) -> ScanStatistics {
        ScanStatistics {
            points_ranked: self.points_ranked,
            points_scanned: self.points_scanned,
            distinct_labels: self.distinct_labels,
            scan_duration: self.scan_duration,
        }
    }
}
