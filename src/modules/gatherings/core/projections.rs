// Mapping from the aggregate to read-model mutations.
//
// Mutations are derived from the state after the event folded in, not from
// the event alone, so view counters can never drift from the aggregate.

use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::{Gathering, GatheringState, Reservation};
use crate::modules::gatherings::queries::{GatheringView, ReservationView, TimeSlotView};

pub enum Mutation {
    UpsertGathering(GatheringView),
    RemoveGathering { gathering_id: String },
    UpsertReservation(ReservationView),
    RemoveReservation { reservation_id: String },
}

fn gathering_view(gathering: &Gathering, version: i64) -> GatheringView {
    GatheringView {
        gathering_id: gathering.gathering_id.clone(),
        title: gathering.title.clone(),
        venue: gathering.venue.clone(),
        held_on: gathering.held_on.clone(),
        cost_per_person: gathering.cost_per_person,
        description: gathering.description.clone(),
        image_url: gathering.image_url.clone(),
        is_active: gathering.is_active,
        max_participants: gathering.max_participants,
        current_participants: gathering.current_participants,
        slots: gathering
            .slots
            .iter()
            .map(|slot| TimeSlotView {
                slot_id: slot.slot_id.clone(),
                label: slot.label.clone(),
                max_participants: slot.max_participants,
                current_participants: slot.current_participants,
            })
            .collect(),
        version,
        created_at: gathering.created_at,
        updated_at: gathering.updated_at,
    }
}

fn reservation_view(gathering: &Gathering, reservation: &Reservation) -> ReservationView {
    ReservationView {
        reservation_id: reservation.reservation_id.clone(),
        gathering_id: gathering.gathering_id.clone(),
        slot_id: reservation.slot_id.clone(),
        slot_label: gathering
            .slot(&reservation.slot_id)
            .map(|slot| slot.label.clone())
            .unwrap_or_default(),
        reservation_number: reservation.reservation_number,
        guest_name: reservation.guest_name.clone(),
        email: reservation.email.clone(),
        phone: reservation.phone.clone(),
        party_size: reservation.party_size,
        companions: reservation.companions.clone(),
        total_cost: reservation.total_cost,
        notes: reservation.notes.clone(),
        created_at: reservation.created_at,
        updated_at: reservation.updated_at,
    }
}

/// `state` is the aggregate after `event` folded in; `version` is the stream
/// version at that point.
pub fn apply(state: &GatheringState, version: i64, event: &GatheringEvent) -> Vec<Mutation> {
    if let GatheringEvent::GatheringRemovedV1(details) = event {
        return vec![Mutation::RemoveGathering {
            gathering_id: details.gathering_id.clone(),
        }];
    }

    let GatheringState::Open(gathering) = state else {
        return vec![];
    };

    match event {
        GatheringEvent::GatheringCreatedV1(_)
        | GatheringEvent::GatheringUpdatedV1(_)
        | GatheringEvent::TimeSlotAddedV1(_)
        | GatheringEvent::TimeSlotUpdatedV1(_) => {
            vec![Mutation::UpsertGathering(gathering_view(gathering, version))]
        }

        GatheringEvent::TimeSlotRemovedV1(details) => {
            let mut mutations: Vec<Mutation> = details
                .cancelled_reservation_ids
                .iter()
                .map(|reservation_id| Mutation::RemoveReservation {
                    reservation_id: reservation_id.clone(),
                })
                .collect();
            mutations.push(Mutation::UpsertGathering(gathering_view(gathering, version)));
            mutations
        }

        GatheringEvent::ReservationPlacedV1(details) => {
            reservation_mutations(gathering, &details.reservation_id, version)
        }
        GatheringEvent::ReservationChangedV1(details) => {
            reservation_mutations(gathering, &details.reservation_id, version)
        }

        GatheringEvent::ReservationCancelledV1(details) => vec![
            Mutation::RemoveReservation {
                reservation_id: details.reservation_id.clone(),
            },
            Mutation::UpsertGathering(gathering_view(gathering, version)),
        ],

        // Already handled by the early return; an Open state cannot follow it.
        GatheringEvent::GatheringRemovedV1(_) => vec![],
    }
}

fn reservation_mutations(
    gathering: &Gathering,
    reservation_id: &str,
    version: i64,
) -> Vec<Mutation> {
    let mut mutations = vec![];
    if let Some(reservation) = gathering.reservation(reservation_id) {
        mutations.push(Mutation::UpsertReservation(reservation_view(
            gathering,
            reservation,
        )));
    }
    mutations.push(Mutation::UpsertGathering(gathering_view(gathering, version)));
    mutations
}
