// Evolve function: combine a prior state with a new event to produce the next
// state.
//
// Counter movement is delegated to the capacity module; this file decides
// which records appear, disappear, or change.
//
// Boundaries
// - No input or output. No side effects.
// - Events that do not apply to the current state leave it unchanged.

use crate::modules::gatherings::core::capacity;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::{Gathering, GatheringState, Reservation, TimeSlot};

pub fn evolve(state: GatheringState, event: GatheringEvent) -> GatheringState {
    match (state, event) {
        (GatheringState::None, GatheringEvent::GatheringCreatedV1(details)) => {
            let slots: Vec<TimeSlot> = details
                .slots
                .into_iter()
                .map(|seed| TimeSlot {
                    slot_id: seed.slot_id,
                    label: seed.label,
                    max_participants: seed.max_participants,
                    current_participants: 0,
                })
                .collect();
            let mut gathering = Gathering {
                gathering_id: details.gathering_id,
                title: details.title,
                venue: details.venue,
                held_on: details.held_on,
                cost_per_person: details.cost_per_person,
                description: details.description,
                image_url: details.image_url,
                is_active: details.is_active,
                max_participants: 0,
                current_participants: 0,
                slots,
                reservations: vec![],
                created_at: details.occurred_at,
                updated_at: details.occurred_at,
            };
            capacity::refresh_capacity(&mut gathering);
            GatheringState::Open(gathering)
        }

        (GatheringState::Open(mut gathering), GatheringEvent::GatheringUpdatedV1(details)) => {
            gathering.title = details.title;
            gathering.venue = details.venue;
            gathering.held_on = details.held_on;
            gathering.cost_per_person = details.cost_per_person;
            gathering.description = details.description;
            gathering.image_url = details.image_url;
            gathering.is_active = details.is_active;
            gathering.updated_at = details.occurred_at;
            GatheringState::Open(gathering)
        }

        (GatheringState::Open(_), GatheringEvent::GatheringRemovedV1(_)) => GatheringState::Removed,

        (GatheringState::Open(mut gathering), GatheringEvent::TimeSlotAddedV1(details)) => {
            gathering.slots.push(TimeSlot {
                slot_id: details.slot_id,
                label: details.label,
                max_participants: details.max_participants,
                current_participants: 0,
            });
            capacity::refresh_capacity(&mut gathering);
            gathering.updated_at = details.occurred_at;
            GatheringState::Open(gathering)
        }

        (GatheringState::Open(mut gathering), GatheringEvent::TimeSlotUpdatedV1(details)) => {
            if let Some(slot) = gathering.slot_mut(&details.slot_id) {
                slot.label = details.label;
                slot.max_participants = details.max_participants;
            }
            capacity::refresh_capacity(&mut gathering);
            gathering.updated_at = details.occurred_at;
            GatheringState::Open(gathering)
        }

        (GatheringState::Open(mut gathering), GatheringEvent::TimeSlotRemovedV1(details)) => {
            gathering
                .reservations
                .retain(|reservation| {
                    !details
                        .cancelled_reservation_ids
                        .contains(&reservation.reservation_id)
                });
            gathering.slots.retain(|slot| slot.slot_id != details.slot_id);
            capacity::release_all(&mut gathering, details.released_participants);
            capacity::refresh_capacity(&mut gathering);
            gathering.updated_at = details.occurred_at;
            GatheringState::Open(gathering)
        }

        (GatheringState::Open(mut gathering), GatheringEvent::ReservationPlacedV1(details)) => {
            capacity::occupy(&mut gathering, &details.slot_id, details.party_size);
            gathering.reservations.push(Reservation {
                reservation_id: details.reservation_id,
                slot_id: details.slot_id,
                reservation_number: details.reservation_number,
                guest_name: details.guest_name,
                email: details.email,
                phone: details.phone,
                party_size: details.party_size,
                companions: details.companions,
                total_cost: details.total_cost,
                notes: details.notes,
                created_at: details.occurred_at,
                updated_at: details.occurred_at,
            });
            GatheringState::Open(gathering)
        }

        (GatheringState::Open(mut gathering), GatheringEvent::ReservationChangedV1(details)) => {
            capacity::shift(
                &mut gathering,
                &details.previous_slot_id,
                details.previous_party_size,
                &details.slot_id,
                details.party_size,
            );
            if let Some(reservation) = gathering.reservation_mut(&details.reservation_id) {
                reservation.slot_id = details.slot_id;
                reservation.party_size = details.party_size;
                reservation.guest_name = details.guest_name;
                reservation.email = details.email;
                reservation.phone = details.phone;
                reservation.companions = details.companions;
                reservation.total_cost = details.total_cost;
                reservation.notes = details.notes;
                reservation.updated_at = details.occurred_at;
            }
            GatheringState::Open(gathering)
        }

        (GatheringState::Open(mut gathering), GatheringEvent::ReservationCancelledV1(details)) => {
            capacity::release(&mut gathering, &details.slot_id, details.party_size);
            gathering
                .reservations
                .retain(|reservation| reservation.reservation_id != details.reservation_id);
            GatheringState::Open(gathering)
        }

        (state, _) => state,
    }
}
