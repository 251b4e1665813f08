//! Half-open time intervals.
//!
//! Two intervals overlap when `a.start < b.end && b.start < a.end`.
//! Adjacent intervals (where one ends exactly when another starts) do NOT overlap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` interval in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether the two intervals share any instant. A degenerate interval
    /// shares none.
    pub fn overlaps(&self, other: &Interval) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// An interval with `end <= start` covers no time.
    pub fn is_degenerate(&self) -> bool {
        self.end <= self.start
    }
}
