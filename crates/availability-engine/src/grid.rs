//! Slot grid generation -- a fixed-granularity lattice of time slots per calendar day.
//!
//! Each day spans the half-open `[day_start_hour, day_end_hour)` window in local
//! wall-clock time. Slots step forward by the granularity; a trailing window
//! shorter than one slot is not emitted.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::interval::Interval;

pub const DEFAULT_GRANULARITY_MINUTES: u32 = 30;
pub const DEFAULT_DAY_START_HOUR: u32 = 6;
pub const DEFAULT_DAY_END_HOUR: u32 = 22;

/// One discrete slot of the lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub is_busy: bool,
    /// Every event interval that overlapped this slot, in marking order.
    pub overlapping_events: Vec<Interval>,
}

impl TimeSlot {
    fn free(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            is_busy: false,
            overlapping_events: Vec::new(),
        }
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

/// The slots of a single local calendar day, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

/// Generate the slot lattice for every day in `[start_date, end_date]`, in UTC wall-clock time.
///
/// Delegates to [`generate_time_slots_in`] with `Tz::UTC`.
pub fn generate_time_slots(
    start_date: NaiveDate,
    end_date: NaiveDate,
    granularity_minutes: u32,
    day_start_hour: u32,
    day_end_hour: u32,
) -> Vec<DaySlots> {
    generate_time_slots_in(
        start_date,
        end_date,
        granularity_minutes,
        day_start_hour,
        day_end_hour,
        Tz::UTC,
    )
}

/// Generate the slot lattice for every day in `[start_date, end_date]` in the given timezone.
///
/// # Arguments
/// - `start_date`, `end_date` -- inclusive range of local calendar days
/// - `granularity_minutes` -- slot width
/// - `day_start_hour` -- first slot starts at this local hour
/// - `day_end_hour` -- no slot ends after this local hour (clamped to 24)
/// - `tz` -- timezone whose wall clock the lattice is aligned to
///
/// An inverted range yields an empty grid. A zero granularity or an empty hour
/// window yields days without slots. Local times skipped by a DST transition
/// produce no slot; ambiguous local times resolve to the earlier instant.
pub fn generate_time_slots_in(
    start_date: NaiveDate,
    end_date: NaiveDate,
    granularity_minutes: u32,
    day_start_hour: u32,
    day_end_hour: u32,
    tz: Tz,
) -> Vec<DaySlots> {
    if start_date > end_date {
        return Vec::new();
    }

    let offsets = slot_offsets(granularity_minutes, day_start_hour, day_end_hour);
    let step = Duration::minutes(i64::from(granularity_minutes));

    start_date
        .iter_days()
        .take_while(|date| *date <= end_date)
        .map(|date| {
            let midnight = date.and_time(NaiveTime::MIN);
            let slots = offsets
                .iter()
                .filter_map(|&offset| resolve_local(&tz, midnight + Duration::minutes(offset)))
                .map(|start| TimeSlot::free(start, start + step))
                .collect();
            DaySlots { date, slots }
        })
        .collect()
}

/// Number of slots a single day holds for the given window, ignoring DST gaps.
pub fn slots_per_day(granularity_minutes: u32, day_start_hour: u32, day_end_hour: u32) -> usize {
    slot_offsets(granularity_minutes, day_start_hour, day_end_hour).len()
}

/// Minute offsets from local midnight at which each slot of a day starts.
fn slot_offsets(granularity_minutes: u32, day_start_hour: u32, day_end_hour: u32) -> Vec<i64> {
    let day_end_hour = day_end_hour.min(24);
    if granularity_minutes == 0 || day_start_hour >= day_end_hour {
        return Vec::new();
    }

    let step = i64::from(granularity_minutes);
    let window_end = i64::from(day_end_hour) * 60;
    let mut offsets = Vec::new();
    let mut offset = i64::from(day_start_hour) * 60;
    // A slot is only emitted when it fits the window in full.
    while offset + step <= window_end {
        offsets.push(offset);
        offset += step;
    }
    offsets
}

fn resolve_local(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
