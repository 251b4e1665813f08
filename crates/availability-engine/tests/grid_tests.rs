//! Tests for slot grid generation and half-open intervals.

use availability_engine::grid::{generate_time_slots, generate_time_slots_in, slots_per_day};
use availability_engine::interval::Interval;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ── Lattice shape ───────────────────────────────────────────────────────────

#[test]
fn default_window_has_32_half_hour_slots() {
    let grid = generate_time_slots(date(2026, 3, 17), date(2026, 3, 17), 30, 6, 22);

    assert_eq!(grid.len(), 1);
    let slots = &grid[0].slots;
    assert_eq!(slots.len(), 32);
    assert_eq!(slots[0].start, Utc.with_ymd_and_hms(2026, 3, 17, 6, 0, 0).unwrap());
    assert_eq!(slots[31].start, Utc.with_ymd_and_hms(2026, 3, 17, 21, 30, 0).unwrap());
    assert_eq!(slots[31].end, Utc.with_ymd_and_hms(2026, 3, 17, 22, 0, 0).unwrap());
    assert!(slots.iter().all(|s| !s.is_busy && s.overlapping_events.is_empty()));
}

#[test]
fn date_range_is_inclusive() {
    let grid = generate_time_slots(date(2026, 3, 16), date(2026, 3, 18), 30, 6, 22);

    let dates: Vec<NaiveDate> = grid.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date(2026, 3, 16), date(2026, 3, 17), date(2026, 3, 18)]);
    assert!(grid.iter().all(|d| d.slots.len() == 32));
}

#[test]
fn inverted_range_yields_empty_grid() {
    let grid = generate_time_slots(date(2026, 3, 18), date(2026, 3, 17), 30, 6, 22);
    assert!(grid.is_empty());
}

#[test]
fn trailing_partial_window_is_not_emitted() {
    // 06:00-22:00 is 960 minutes; 45-minute slots fit 21 times (ending 21:45).
    let grid = generate_time_slots(date(2026, 3, 17), date(2026, 3, 17), 45, 6, 22);
    let slots = &grid[0].slots;

    assert_eq!(slots.len(), 21);
    let last = slots.last().unwrap();
    assert_eq!(last.start, Utc.with_ymd_and_hms(2026, 3, 17, 21, 0, 0).unwrap());
    assert_eq!(last.end, Utc.with_ymd_and_hms(2026, 3, 17, 21, 45, 0).unwrap());
}

#[test]
fn consecutive_slots_are_contiguous_with_exact_granularity() {
    let grid = generate_time_slots(date(2026, 3, 17), date(2026, 3, 19), 20, 7, 19);

    for day in &grid {
        for slot in &day.slots {
            assert_eq!(slot.end - slot.start, Duration::minutes(20));
        }
        for pair in day.slots.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "slots must abut on {}", day.date);
        }
    }
}

#[test]
fn zero_granularity_or_empty_window_yields_days_without_slots() {
    let zero = generate_time_slots(date(2026, 3, 17), date(2026, 3, 18), 0, 6, 22);
    assert_eq!(zero.len(), 2);
    assert!(zero.iter().all(|d| d.slots.is_empty()));

    let empty_window = generate_time_slots(date(2026, 3, 17), date(2026, 3, 17), 30, 22, 6);
    assert_eq!(empty_window.len(), 1);
    assert!(empty_window[0].slots.is_empty());
}

#[test]
fn end_hour_past_midnight_is_clamped() {
    let grid = generate_time_slots(date(2026, 3, 17), date(2026, 3, 17), 60, 20, 30);
    let slots = &grid[0].slots;

    assert_eq!(slots.len(), 4);
    assert_eq!(slots[3].end, Utc.with_ymd_and_hms(2026, 3, 18, 0, 0, 0).unwrap());
    assert_eq!(slots_per_day(60, 20, 30), 4);
}

#[test]
fn slots_per_day_matches_generated_lattice() {
    assert_eq!(slots_per_day(30, 6, 22), 32);
    assert_eq!(slots_per_day(45, 6, 22), 21);
    assert_eq!(slots_per_day(15, 0, 24), 96);
    assert_eq!(slots_per_day(0, 6, 22), 0);
}

#[test]
fn repeated_generation_is_deep_equal() {
    let a = generate_time_slots(date(2026, 3, 1), date(2026, 3, 31), 15, 6, 22);
    let b = generate_time_slots(date(2026, 3, 1), date(2026, 3, 31), 15, 6, 22);
    assert_eq!(a, b);
}

// ── Timezones ───────────────────────────────────────────────────────────────

#[test]
fn lattice_is_aligned_to_local_wall_clock() {
    // New York is UTC-4 (EDT) on 2026-03-17.
    let grid = generate_time_slots_in(
        date(2026, 3, 17),
        date(2026, 3, 17),
        30,
        6,
        22,
        Tz::America__New_York,
    );
    let slots = &grid[0].slots;

    assert_eq!(slots.len(), 32);
    assert_eq!(slots[0].start, Utc.with_ymd_and_hms(2026, 3, 17, 10, 0, 0).unwrap());
    assert_eq!(slots[31].end, Utc.with_ymd_and_hms(2026, 3, 18, 2, 0, 0).unwrap());
}

#[test]
fn local_times_in_dst_gap_are_skipped() {
    // 2026-03-08 02:00 EST jumps to 03:00 EDT in New York.
    let grid = generate_time_slots_in(
        date(2026, 3, 8),
        date(2026, 3, 8),
        30,
        0,
        6,
        Tz::America__New_York,
    );
    let slots = &grid[0].slots;

    // 12 wall-clock slots minus 02:00 and 02:30.
    assert_eq!(slots.len(), 10);
    // 01:30 EST (06:30Z) ends exactly where 03:00 EDT (07:00Z) begins.
    assert_eq!(slots[3].start, Utc.with_ymd_and_hms(2026, 3, 8, 6, 30, 0).unwrap());
    assert_eq!(slots[3].end, slots[4].start);
}

// ── Intervals ───────────────────────────────────────────────────────────────

#[test]
fn adjacent_intervals_do_not_overlap() {
    let a = Interval::new(
        Utc.with_ymd_and_hms(2026, 3, 17, 9, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 17, 10, 0, 0).unwrap(),
    );
    let b = Interval::new(
        Utc.with_ymd_and_hms(2026, 3, 17, 10, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 17, 11, 0, 0).unwrap(),
    );
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn inverted_interval_is_degenerate_and_overlaps_nothing() {
    let inverted = Interval::new(
        Utc.with_ymd_and_hms(2026, 3, 17, 11, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 17, 9, 0, 0).unwrap(),
    );
    let day = Interval::new(
        Utc.with_ymd_and_hms(2026, 3, 17, 6, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 17, 22, 0, 0).unwrap(),
    );
    assert!(inverted.is_degenerate());
    assert!(!inverted.overlaps(&day));
    assert_eq!(day.duration_minutes(), 960);
}
