//! Meeting-time ranking over common availability.
//!
//! Each qualifying common period contributes exactly one candidate, anchored
//! at the period's start. Candidates are ranked by a time-of-day and
//! day-of-week heuristic.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityResult;
use crate::common::find_common_availability;
use crate::member::MemberId;
use crate::periods::Period;

/// Maximum number of candidates returned.
pub const MAX_MEETING_CANDIDATES: usize = 5;

const BUSINESS_START_HOUR: u32 = 9;
const BUSINESS_END_HOUR: u32 = 17;
const MORNING_END_HOUR: u32 = 12;

/// A proposed meeting time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingCandidate {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Whether the meeting lies entirely within 09:00-17:00 local time.
    pub is_preferred: bool,
    /// Comparative ranking signal; higher is better.
    pub score: i32,
}

/// Rank meeting times in UTC wall-clock time.
///
/// Delegates to [`find_optimal_meeting_times_in`] with `Tz::UTC`.
pub fn find_optimal_meeting_times(
    result: &AvailabilityResult,
    duration_minutes: u32,
    required_attendee_ids: &[MemberId],
) -> Vec<MeetingCandidate> {
    find_optimal_meeting_times_in(result, duration_minutes, required_attendee_ids, Tz::UTC)
}

/// Rank meeting times, scoring them by local time in `tz`.
///
/// With no required attendees the result's own common periods are used;
/// otherwise common availability is recomputed for exactly those attendees.
/// Periods shorter than `duration_minutes` are skipped. Candidates are sorted
/// by score, then by earliest start, and the top [`MAX_MEETING_CANDIDATES`]
/// are returned.
pub fn find_optimal_meeting_times_in(
    result: &AvailabilityResult,
    duration_minutes: u32,
    required_attendee_ids: &[MemberId],
    tz: Tz,
) -> Vec<MeetingCandidate> {
    let duration = Duration::minutes(i64::from(duration_minutes));

    let recomputed: Vec<Period>;
    let periods: &[Period] = if required_attendee_ids.is_empty() {
        &result.common
    } else {
        recomputed = find_common_availability(&result.individual, required_attendee_ids);
        &recomputed
    };

    let mut candidates: Vec<MeetingCandidate> = periods
        .iter()
        .filter(|period| period.end - period.start >= duration)
        .map(|period| {
            let start = period.start;
            let end = start + duration;
            MeetingCandidate {
                start,
                end,
                is_preferred: is_within_business_hours(start, end, &tz),
                score: calculate_time_score_in(start, &tz),
            }
        })
        .collect();

    candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.start.cmp(&b.start)));
    candidates.truncate(MAX_MEETING_CANDIDATES);
    candidates
}

/// Score a start time in UTC wall-clock time.
pub fn calculate_time_score(start: DateTime<Utc>) -> i32 {
    calculate_time_score_in(start, &Tz::UTC)
}

/// Score a start time by its local weekday and hour.
///
/// +20 on Monday to Friday, +30 for hours in [9, 17), a further +10 for
/// hours in [9, 12), and -20 before 08:00 or from 21:00 on.
pub fn calculate_time_score_in(start: DateTime<Utc>, tz: &Tz) -> i32 {
    let local = start.with_timezone(tz);
    let hour = local.hour();
    let mut score = 0;

    if local.weekday().num_days_from_monday() < 5 {
        score += 20;
    }
    if (BUSINESS_START_HOUR..BUSINESS_END_HOUR).contains(&hour) {
        score += 30;
    }
    if (BUSINESS_START_HOUR..MORNING_END_HOUR).contains(&hour) {
        score += 10;
    }
    if !(8..=20).contains(&hour) {
        score -= 20;
    }

    score
}

fn is_within_business_hours(start: DateTime<Utc>, end: DateTime<Utc>, tz: &Tz) -> bool {
    let local_start = start.with_timezone(tz);
    let local_end = end.with_timezone(tz);
    local_start.date_naive() == local_end.date_naive()
        && local_start.hour() >= BUSINESS_START_HOUR
        && local_end.num_seconds_from_midnight() <= BUSINESS_END_HOUR * 3600
}
