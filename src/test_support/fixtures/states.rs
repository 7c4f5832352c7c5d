// Shared state fixtures: pre-folded gatherings for decide and evolve tests.

use crate::modules::gatherings::core::events::v1::gathering::{GatheringCreatedV1, SlotSeed};
use crate::modules::gatherings::core::events::v1::reservations::ReservationPlacedV1;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::evolve::evolve;
use crate::modules::gatherings::core::state::GatheringState;

pub const OCCURRED_AT: i64 = 1_700_000_000_000;

/// The reference gathering: cost 1500, one slot "10:00" with ten seats.
pub fn created_event() -> GatheringEvent {
    GatheringEvent::GatheringCreatedV1(GatheringCreatedV1 {
        gathering_id: "gat-fixed-0001".to_string(),
        title: "Spring tea gathering".to_string(),
        venue: "Kouetsu-an".to_string(),
        held_on: "2026-04-29".to_string(),
        cost_per_person: 1500,
        description: "A quiet morning seating.".to_string(),
        image_url: None,
        is_active: true,
        slots: vec![SlotSeed {
            slot_id: "slot-fixed-0001".to_string(),
            label: "10:00".to_string(),
            max_participants: 10,
        }],
        occurred_at: OCCURRED_AT,
    })
}

/// A placement into the reference slot; the 6-digit number is derived from
/// the digits of the reservation id so fixtures never collide.
pub fn placed_event(reservation_id: &str, party_size: i64) -> GatheringEvent {
    let digits: String = reservation_id
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let reservation_number = 100_000 + digits.parse::<u32>().unwrap_or(0) % 800_000;
    GatheringEvent::ReservationPlacedV1(ReservationPlacedV1 {
        reservation_id: reservation_id.to_string(),
        slot_id: "slot-fixed-0001".to_string(),
        reservation_number,
        guest_name: "Sen Rikyu".to_string(),
        email: "rikyu@example.jp".to_string(),
        phone: "090-0000-0000".to_string(),
        party_size,
        companions: vec![],
        total_cost: 1500 * party_size,
        notes: String::new(),
        occurred_at: OCCURRED_AT,
    })
}

pub fn open_gathering() -> GatheringState {
    evolve(GatheringState::None, created_event())
}

pub fn gathering_with_reservation(reservation_id: &str, party_size: i64) -> GatheringState {
    evolve(open_gathering(), placed_event(reservation_id, party_size))
}

pub fn gathering_with_reservations(reservations: &[(&str, i64)]) -> GatheringState {
    reservations
        .iter()
        .fold(open_gathering(), |state, (reservation_id, party_size)| {
            evolve(state, placed_event(reservation_id, *party_size))
        })
}
