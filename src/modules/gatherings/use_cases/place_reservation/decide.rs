// Pure decision function for placing a reservation.
//
// Rules
// - The slot must exist and have room for the whole party (hard cap).
// - Party size at least one, at most three named companions.
// - The 6-digit number must be unused within the gathering.
// - total_cost is priced here, at the current cost per person, and frozen.
//
// Visibility is not checked: a hidden gathering can still be booked through
// the admin screens, it just does not appear in public listings.

use crate::modules::gatherings::core::decision::{require_open, DecideError, MAX_COMPANIONS};
use crate::modules::gatherings::core::events::v1::reservations::ReservationPlacedV1;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::GatheringState;
use crate::modules::gatherings::use_cases::place_reservation::command::PlaceReservation;

pub fn decide_place(
    state: &GatheringState,
    command: PlaceReservation,
) -> Result<Vec<GatheringEvent>, DecideError> {
    let gathering = require_open(state)?;
    let slot = gathering
        .slot(&command.slot_id)
        .ok_or(DecideError::UnknownTimeSlot)?;

    if command.party_size < 1 {
        return Err(DecideError::EmptyParty);
    }
    if command.companions.len() > MAX_COMPANIONS {
        return Err(DecideError::TooManyCompanions);
    }
    if gathering.number_taken(command.reservation_number) {
        return Err(DecideError::ReservationNumberTaken);
    }

    let available = (slot.max_participants - slot.current_participants).max(0);
    if command.party_size > available {
        return Err(DecideError::SlotFull {
            requested: command.party_size,
            available,
        });
    }

    let total_cost = gathering.cost_per_person * command.party_size;

    Ok(vec![GatheringEvent::ReservationPlacedV1(ReservationPlacedV1 {
        reservation_id: command.reservation_id,
        slot_id: command.slot_id,
        reservation_number: command.reservation_number,
        guest_name: command.guest_name,
        email: command.email,
        phone: command.phone,
        party_size: command.party_size,
        companions: command.companions,
        total_cost,
        notes: command.notes,
        occurred_at: command.occurred_at,
    })])
}
