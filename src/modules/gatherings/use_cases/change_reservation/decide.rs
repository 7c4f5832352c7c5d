// Pure decision function for reservation changes.
//
// When the reservation moves between slots, the event carries both bindings:
// the fold releases the old slot by the old party size and occupies the new
// slot by the new one. The cap check excludes the party's own current seats,
// so resizing within a slot only needs room for the growth.
//
// total_cost is re-priced at the gathering's current cost per person.

use crate::modules::gatherings::core::decision::{require_open, DecideError, MAX_COMPANIONS};
use crate::modules::gatherings::core::events::v1::reservations::ReservationChangedV1;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::GatheringState;
use crate::modules::gatherings::use_cases::change_reservation::command::ChangeReservation;

pub fn decide_change(
    state: &GatheringState,
    command: ChangeReservation,
) -> Result<Vec<GatheringEvent>, DecideError> {
    let gathering = require_open(state)?;
    let reservation = gathering
        .reservation(&command.reservation_id)
        .ok_or(DecideError::UnknownReservation)?;
    let target = gathering
        .slot(&command.slot_id)
        .ok_or(DecideError::UnknownTimeSlot)?;

    if command.party_size < 1 {
        return Err(DecideError::EmptyParty);
    }
    if command.companions.len() > MAX_COMPANIONS {
        return Err(DecideError::TooManyCompanions);
    }

    let already_seated = if reservation.slot_id == command.slot_id {
        reservation.party_size
    } else {
        0
    };
    let available = (target.max_participants - target.current_participants + already_seated).max(0);
    if command.party_size > available {
        return Err(DecideError::SlotFull {
            requested: command.party_size,
            available,
        });
    }

    let total_cost = gathering.cost_per_person * command.party_size;

    Ok(vec![GatheringEvent::ReservationChangedV1(ReservationChangedV1 {
        reservation_id: command.reservation_id,
        slot_id: command.slot_id,
        previous_slot_id: reservation.slot_id.clone(),
        party_size: command.party_size,
        previous_party_size: reservation.party_size,
        guest_name: command.guest_name,
        email: command.email,
        phone: command.phone,
        companions: command.companions,
        total_cost,
        notes: command.notes,
        occurred_at: command.occurred_at,
    })])
}
