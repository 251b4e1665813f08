//! # availability-engine
//!
//! Multi-member free/busy grids and meeting-time ranking for family calendars.
//!
//! Turns already-expanded calendar events and a family roster into per-member
//! slot grids, intersects them across participants, and ranks candidate
//! meeting times. Purely synchronous and in-memory: every call derives fresh
//! results and shares no state with other calls.
//!
//! ## Modules
//!
//! - [`grid`] -- Fixed-granularity slot lattice per calendar day
//! - [`busy`] -- Mark member slots busy from overlapping events
//! - [`periods`] -- Merge free slots into available periods
//! - [`common`] -- Intersect member grids into commonly free periods
//! - [`meeting`] -- Score and rank meeting candidates
//! - [`availability`] -- End-to-end query over a roster and event list
//! - [`member`] -- Roster and event inputs
//! - [`interval`] -- Half-open time intervals
//! - [`palette`] -- Deterministic member colors
//! - [`config`] -- Query configuration
//! - [`error`] -- Error types

pub mod availability;
pub mod busy;
pub mod common;
pub mod config;
pub mod error;
pub mod grid;
pub mod interval;
pub mod meeting;
pub mod member;
pub mod palette;
pub mod periods;

pub use availability::{calculate_family_availability, AvailabilityResult};
pub use busy::{map_events_to_members, mark_busy_period, MemberAvailability};
pub use common::{find_common_availability, group_consecutive_slots};
pub use config::AvailabilityConfig;
pub use error::ScheduleError;
pub use grid::{generate_time_slots, generate_time_slots_in, DaySlots, TimeSlot};
pub use interval::Interval;
pub use meeting::{
    calculate_time_score, find_optimal_meeting_times, find_optimal_meeting_times_in,
    MeetingCandidate,
};
pub use member::{CalendarEvent, FamilyMember, MemberId};
pub use palette::color_for;
pub use periods::{calculate_available_periods, Period};
