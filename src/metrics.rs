use std::time::{Duration, Instant};

/// Counters for one generation run.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    total: usize,
    plain_written: usize,
    plain_failed: usize,
    round_written: usize,
    round_failed: usize,
    round_skipped: usize,
    start_time: Instant,
}

impl RunMetrics {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            plain_written: 0,
            plain_failed: 0,
            round_written: 0,
            round_failed: 0,
            round_skipped: 0,
            start_time: Instant::now(),
        }
    }

    pub fn inc_plain_written(&mut self) {
        self.plain_written += 1;
    }

    pub fn inc_plain_failed(&mut self) {
        self.plain_failed += 1;
    }

    pub fn inc_round_written(&mut self) {
        self.round_written += 1;
    }

    pub fn inc_round_failed(&mut self) {
        self.round_failed += 1;
    }

    pub fn inc_round_skipped(&mut self) {
        self.round_skipped += 1;
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total: self.total,
            plain_written: self.plain_written,
            plain_failed: self.plain_failed,
            round_written: self.round_written,
            round_failed: self.round_failed,
            round_skipped: self.round_skipped,
            elapsed: self.start_time.elapsed(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub total: usize,
    pub plain_written: usize,
    pub plain_failed: usize,
    pub round_written: usize,
    pub round_failed: usize,
    pub round_skipped: usize,
    pub elapsed: Duration,
}

impl MetricsSnapshot {
    /// Sizes whose plain icon was written; this is the run's success count.
    pub fn successes(&self) -> usize {
        self.plain_written
    }

    pub fn all_succeeded(&self) -> bool {
        self.plain_written == self.total && self.round_written == self.total
    }

    /// `<successes>/<total>`
    pub fn summary_line(&self) -> String {
        format!("{}/{}", self.successes(), self.total)
    }
}
