//! Busy-period mapping -- flags slots of a member's grid that events overlap.
//!
//! Marking is monotonic: a slot once busy is never freed within a computation.
//! Raw event intervals are recorded as given, without merging.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::DaySlots;
use crate::interval::Interval;
use crate::member::{CalendarEvent, FamilyMember, MemberId};
use crate::palette::member_color;
use crate::periods::Period;

/// Free/busy state of one family member over the query window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberAvailability {
    pub member_id: MemberId,
    pub name: String,
    pub color: String,
    pub time_slots: Vec<DaySlots>,
    /// Raw event intervals in marking order; may overlap.
    pub busy_periods: Vec<Interval>,
    pub available_periods: Vec<Period>,
}

impl MemberAvailability {
    /// Start tracking a member over the given (still free) grid.
    pub fn new(member: &FamilyMember, time_slots: Vec<DaySlots>) -> Self {
        let color = member
            .color
            .clone()
            .unwrap_or_else(|| member_color(member.id.as_str()).to_string());
        Self {
            member_id: member.id.clone(),
            name: member.name.clone(),
            color,
            time_slots,
            busy_periods: Vec::new(),
            available_periods: Vec::new(),
        }
    }

    /// Number of busy slots across all days.
    pub fn busy_slot_count(&self) -> usize {
        self.time_slots
            .iter()
            .flat_map(|day| &day.slots)
            .filter(|slot| slot.is_busy)
            .count()
    }
}

/// Record an event interval for a member and flag every slot it overlaps.
///
/// Overlap is half-open: an event ending exactly at a slot's start leaves it free.
pub fn mark_busy_period(
    member: &mut MemberAvailability,
    event_start: DateTime<Utc>,
    event_end: DateTime<Utc>,
) {
    let event = Interval::new(event_start, event_end);
    member.busy_periods.push(event);

    for slot in member
        .time_slots
        .iter_mut()
        .flat_map(|day| day.slots.iter_mut())
    {
        if slot.interval().overlaps(&event) {
            slot.is_busy = true;
            slot.overlapping_events.push(event);
        }
    }
}

/// Apply every event to the grids of its attendees.
///
/// Events without attendees constrain nobody. Attendees missing from `members`
/// are skipped.
pub fn map_events_to_members(
    events: &[CalendarEvent],
    members: &mut BTreeMap<MemberId, MemberAvailability>,
) {
    for event in events {
        for attendee in &event.attendees {
            match members.get_mut(attendee) {
                Some(member) => mark_busy_period(member, event.start_time, event.end_time),
                None => debug!(
                    "Skipping attendee {} not in roster (event {} - {})",
                    attendee, event.start_time, event.end_time
                ),
            }
        }
    }
}
