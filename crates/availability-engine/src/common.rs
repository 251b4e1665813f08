//! Common availability -- the slots free for every selected participant.
//!
//! The first participant present in the map supplies the enumeration grid.
//! Every other participant is matched by date and exact slot start, not by
//! position, so grids of differing shape cannot produce false matches.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};

use crate::busy::MemberAvailability;
use crate::member::MemberId;
use crate::periods::{is_contiguous, Period};

/// Find periods during which all `participant_ids` are free.
///
/// Participants missing from `individual` are excluded. With no participant
/// left the result is empty. No minimum length is applied to the periods.
pub fn find_common_availability(
    individual: &BTreeMap<MemberId, MemberAvailability>,
    participant_ids: &[MemberId],
) -> Vec<Period> {
    let participants: Vec<&MemberAvailability> = participant_ids
        .iter()
        .filter_map(|id| individual.get(id))
        .collect();

    let Some(basis) = participants.first() else {
        return Vec::new();
    };

    // (date, slot start) -> busy, per participant.
    let indexes: Vec<HashMap<(NaiveDate, DateTime<Utc>), bool>> = participants
        .iter()
        .map(|member| {
            member
                .time_slots
                .iter()
                .flat_map(|day| {
                    day.slots
                        .iter()
                        .map(move |slot| ((day.date, slot.start), slot.is_busy))
                })
                .collect()
        })
        .collect();

    let hits: Vec<Period> = basis
        .time_slots
        .iter()
        .flat_map(|day| day.slots.iter().map(move |slot| (day.date, slot)))
        .filter(|(date, slot)| {
            indexes
                .iter()
                .all(|index| index.get(&(*date, slot.start)) == Some(&false))
        })
        .map(|(date, slot)| Period {
            start: slot.start,
            end: slot.end,
            date: Some(date),
        })
        .collect();

    group_consecutive_slots(&hits)
}

/// Merge single-slot hits into periods.
///
/// Two neighbours merge only when they are contiguous in time and share a
/// calendar day, so no period crosses midnight.
pub fn group_consecutive_slots(hits: &[Period]) -> Vec<Period> {
    let mut grouped: Vec<Period> = Vec::new();
    for hit in hits {
        if let Some(last) = grouped.last_mut() {
            if last.date == hit.date && is_contiguous(last.end, hit.start) {
                last.end = last.end.max(hit.end);
                continue;
            }
        }
        grouped.push(hit.clone());
    }
    grouped
}
