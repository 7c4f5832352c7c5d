// Pure decision function for time slot removal.
//
// The cascade is decided here: every reservation bound to the slot is
// cancelled, and the released participant total is recorded on the event so
// the gathering counter drops by exactly what was seated.

use crate::modules::gatherings::core::decision::{require_open, DecideError};
use crate::modules::gatherings::core::events::v1::time_slots::TimeSlotRemovedV1;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::GatheringState;
use crate::modules::gatherings::use_cases::remove_time_slot::command::RemoveTimeSlot;

pub fn decide_remove_slot(
    state: &GatheringState,
    command: RemoveTimeSlot,
) -> Result<Vec<GatheringEvent>, DecideError> {
    let gathering = require_open(state)?;
    if gathering.slot(&command.slot_id).is_none() {
        return Err(DecideError::UnknownTimeSlot);
    }

    let bound: Vec<_> = gathering
        .reservations
        .iter()
        .filter(|reservation| reservation.slot_id == command.slot_id)
        .collect();
    let cancelled_reservation_ids = bound
        .iter()
        .map(|reservation| reservation.reservation_id.clone())
        .collect();
    let released_participants = bound.iter().map(|reservation| reservation.party_size).sum();

    Ok(vec![GatheringEvent::TimeSlotRemovedV1(TimeSlotRemovedV1 {
        slot_id: command.slot_id,
        cancelled_reservation_ids,
        released_participants,
        occurred_at: command.occurred_at,
    })])
}
