// Pure decision function for reservation cancellation.
//
// The event carries the slot binding and party size so the fold can release
// the seats without a lookup.

use crate::modules::gatherings::core::decision::{require_open, DecideError};
use crate::modules::gatherings::core::events::v1::reservations::ReservationCancelledV1;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::GatheringState;
use crate::modules::gatherings::use_cases::cancel_reservation::command::CancelReservation;

pub fn decide_cancel(
    state: &GatheringState,
    command: CancelReservation,
) -> Result<Vec<GatheringEvent>, DecideError> {
    let gathering = require_open(state)?;
    let reservation = gathering
        .reservation(&command.reservation_id)
        .ok_or(DecideError::UnknownReservation)?;

    Ok(vec![GatheringEvent::ReservationCancelledV1(
        ReservationCancelledV1 {
            reservation_id: command.reservation_id,
            slot_id: reservation.slot_id.clone(),
            party_size: reservation.party_size,
            occurred_at: command.occurred_at,
        },
    )])
}
