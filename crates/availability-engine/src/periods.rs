//! Available-period reduction -- merges runs of free slots into maximal periods.
//!
//! Slots are scanned in generation order (day order, then slot order). Runs
//! shorter than the minimum length are dropped.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::grid::DaySlots;

/// Runs of free time shorter than this are not reported.
pub const MIN_AVAILABLE_PERIOD_MINUTES: i64 = 30;

/// Gap between two slots still treated as contiguous.
pub const CONTIGUITY_TOLERANCE_SECONDS: i64 = 60;

/// A maximal contiguous free interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Local calendar day the period starts on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Period {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Whether a slot starting at `next_start` continues a run ending at `end`.
pub(crate) fn is_contiguous(end: DateTime<Utc>, next_start: DateTime<Utc>) -> bool {
    (next_start - end).num_seconds().abs() <= CONTIGUITY_TOLERANCE_SECONDS
}

/// Reduce a member's grid to free periods of at least
/// [`MIN_AVAILABLE_PERIOD_MINUTES`].
pub fn calculate_available_periods(days: &[DaySlots]) -> Vec<Period> {
    calculate_available_periods_with_minimum(days, MIN_AVAILABLE_PERIOD_MINUTES)
}

/// Reduce a member's grid to free periods of at least `min_minutes`.
///
/// A busy slot, or a free slot that does not start where the open period ends,
/// closes the open period. The period still open at the end of the scan is
/// flushed under the same minimum-length rule.
pub fn calculate_available_periods_with_minimum(
    days: &[DaySlots],
    min_minutes: i64,
) -> Vec<Period> {
    let minimum = Duration::minutes(min_minutes);
    let mut periods = Vec::new();
    let mut open: Option<Period> = None;

    for day in days {
        for slot in &day.slots {
            if slot.is_busy {
                close_period(&mut open, &mut periods, minimum);
                continue;
            }

            let extends = open
                .as_ref()
                .is_some_and(|period| is_contiguous(period.end, slot.start));
            if extends {
                if let Some(period) = open.as_mut() {
                    period.end = slot.end;
                }
            } else {
                close_period(&mut open, &mut periods, minimum);
                open = Some(Period {
                    start: slot.start,
                    end: slot.end,
                    date: Some(day.date),
                });
            }
        }
    }

    close_period(&mut open, &mut periods, minimum);
    periods
}

fn close_period(open: &mut Option<Period>, periods: &mut Vec<Period>, minimum: Duration) {
    if let Some(period) = open.take() {
        if period.end - period.start >= minimum {
            periods.push(period);
        }
    }
}
