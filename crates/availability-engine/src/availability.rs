//! Family availability: per-member free/busy grids plus their intersection.
//!
//! Accepts a roster and already-expanded events, builds one slot grid per
//! member, marks each member busy where their events overlap, reduces the free
//! slots to available periods, and intersects the grids of the selected
//! participants into common periods.
//!
//! Inputs are validated here, at the engine boundary. Everything downstream
//! assumes well-formed events and a shared lattice shape.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::busy::{map_events_to_members, MemberAvailability};
use crate::common::find_common_availability;
use crate::config::AvailabilityConfig;
use crate::error::{Result, ScheduleError};
use crate::grid::{generate_time_slots_in, slots_per_day};
use crate::member::{CalendarEvent, FamilyMember, MemberId};
use crate::periods::{calculate_available_periods_with_minimum, Period};

/// Availability of every roster member and of the selected participants together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub individual: BTreeMap<MemberId, MemberAvailability>,
    pub common: Vec<Period>,
}

/// Compute individual and common availability over `[start_date, end_date]`.
///
/// # Arguments
///
/// * `events` -- Expanded event instances; each constrains only its attendees.
/// * `roster` -- Family members to compute grids for.
/// * `start_date`, `end_date` -- Inclusive range of local calendar days.
/// * `participant_ids` -- Members whose common availability is computed.
///   `None` selects the whole roster, in roster order.
/// * `config` -- Lattice shape, timezone and resource bound.
///
/// # Errors
///
/// Returns `ScheduleError::InvalidConfig` or `ScheduleError::InvalidTimezone`
/// for a bad config, `ScheduleError::InvalidEvent` for an event ending before
/// it starts, `ScheduleError::DuplicateMember` for a repeated roster id, and
/// `ScheduleError::TooManySlots` when the query exceeds `config.max_slots`.
pub fn calculate_family_availability(
    events: &[CalendarEvent],
    roster: &[FamilyMember],
    start_date: NaiveDate,
    end_date: NaiveDate,
    participant_ids: Option<&[MemberId]>,
    config: &AvailabilityConfig,
) -> Result<AvailabilityResult> {
    config.validate()?;
    let tz = config.timezone()?;
    validate_events(events)?;

    if roster.is_empty() {
        return Ok(AvailabilityResult::default());
    }

    let requested = slot_count(start_date, end_date, roster.len(), config);
    if requested > config.max_slots {
        warn!(
            "Rejecting availability query: {} slots exceeds limit {}",
            requested, config.max_slots
        );
        return Err(ScheduleError::TooManySlots {
            requested,
            limit: config.max_slots,
        });
    }

    debug!(
        "Computing availability for {} members, {} events, {} to {} ({})",
        roster.len(),
        events.len(),
        start_date,
        end_date,
        tz
    );

    let grid = generate_time_slots_in(
        start_date,
        end_date,
        config.granularity_minutes,
        config.day_start_hour,
        config.day_end_hour,
        tz,
    );

    let mut individual = BTreeMap::new();
    for member in roster {
        match individual.entry(member.id.clone()) {
            Entry::Occupied(_) => {
                return Err(ScheduleError::DuplicateMember(member.id.to_string()));
            }
            Entry::Vacant(slot) => {
                slot.insert(MemberAvailability::new(member, grid.clone()));
            }
        }
    }

    map_events_to_members(events, &mut individual);

    for member in individual.values_mut() {
        member.available_periods =
            calculate_available_periods_with_minimum(&member.time_slots, config.min_period_minutes);
    }

    let roster_ids: Vec<MemberId>;
    let participants = match participant_ids {
        Some(ids) => ids,
        None => {
            roster_ids = roster.iter().map(|member| member.id.clone()).collect();
            &roster_ids
        }
    };
    let common = find_common_availability(&individual, participants);

    debug!(
        "Found {} common periods across {} participants",
        common.len(),
        participants.len()
    );

    Ok(AvailabilityResult { individual, common })
}

fn validate_events(events: &[CalendarEvent]) -> Result<()> {
    match events.iter().position(|event| !event.is_well_formed()) {
        Some(index) => {
            let event = &events[index];
            warn!("Rejecting event #{} ending before it starts", index);
            Err(ScheduleError::InvalidEvent {
                index,
                start: event.start_time.to_rfc3339(),
                end: event.end_time.to_rfc3339(),
            })
        }
        None => Ok(()),
    }
}

/// Days x slots/day x members, saturating.
fn slot_count(
    start_date: NaiveDate,
    end_date: NaiveDate,
    members: usize,
    config: &AvailabilityConfig,
) -> usize {
    if start_date > end_date {
        return 0;
    }
    let days = usize::try_from((end_date - start_date).num_days() + 1).unwrap_or(usize::MAX);
    let per_day = slots_per_day(
        config.granularity_minutes,
        config.day_start_hour,
        config.day_end_hour,
    );
    days.saturating_mul(per_day).saturating_mul(members)
}
