//! Per-matrix timing records and their aggregate.

use std::time::Duration;

/// Elapsed transform time for one matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimingRecord {
    /// 1-based index of the measured matrix in its batch.
    pub index: usize,
    /// Time spent inside the transform.
    pub elapsed: Duration,
}

impl TimingRecord {
    /// Creates a record for the matrix at 1-based `index`.
    pub fn new(index: usize, elapsed: Duration) -> Self {
        Self { index, elapsed }
    }

    /// Elapsed time in seconds.
    #[inline]
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Aggregate statistics over a set of timing records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimingSummary {
    /// Number of records.
    pub count: usize,
    /// Sum of all elapsed times.
    pub total: Duration,
    /// Shortest elapsed time (zero when empty).
    pub min: Duration,
    /// Longest elapsed time (zero when empty).
    pub max: Duration,
}

impl TimingSummary {
    /// Summarizes `records`.
    pub fn from_records(records: &[TimingRecord]) -> Self {
        let Some(first) = records.first() else {
            return Self::default();
        };
        let mut summary = Self {
            count: 0,
            total: Duration::ZERO,
            min: first.elapsed,
            max: first.elapsed,
        };
        for record in records {
            summary.count += 1;
            summary.total += record.elapsed;
            summary.min = summary.min.min(record.elapsed);
            summary.max = summary.max.max(record.elapsed);
        }
        summary
    }

    /// Mean elapsed time (zero when empty).
    pub fn mean(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total.as_nanos() / self.count as u128;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}
