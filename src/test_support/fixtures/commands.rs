// Shared command builders for tests.
//
// Defaults describe the reference gathering: cost 1500 per person, one slot
// "10:00" with ten seats.

use crate::modules::gatherings::use_cases::change_reservation::command::ChangeReservation;
use crate::modules::gatherings::use_cases::create_gathering::command::{
    CreateGathering, NewTimeSlot,
};
use crate::modules::gatherings::use_cases::place_reservation::command::PlaceReservation;
use crate::modules::gatherings::use_cases::update_gathering::command::UpdateGathering;

pub const OCCURRED_AT: i64 = 1_700_000_000_000;

pub struct CreateGatheringBuilder {
    inner: CreateGathering,
}

impl Default for CreateGatheringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateGatheringBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateGathering {
                gathering_id: "gat-fixed-0001".to_string(),
                title: "Spring tea gathering".to_string(),
                venue: "Kouetsu-an".to_string(),
                held_on: "2026-04-29".to_string(),
                cost_per_person: 1500,
                description: "A quiet morning seating.".to_string(),
                image_url: None,
                is_active: true,
                slots: vec![NewTimeSlot {
                    slot_id: "slot-fixed-0001".to_string(),
                    label: "10:00".to_string(),
                    max_participants: 10,
                }],
                occurred_at: OCCURRED_AT,
            },
        }
    }

    pub fn gathering_id(mut self, v: impl Into<String>) -> Self {
        self.inner.gathering_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn cost_per_person(mut self, v: i64) -> Self {
        self.inner.cost_per_person = v;
        self
    }

    pub fn is_active(mut self, v: bool) -> Self {
        self.inner.is_active = v;
        self
    }

    pub fn slot(mut self, slot_id: &str, label: &str, max_participants: i64) -> Self {
        self.inner.slots.push(NewTimeSlot {
            slot_id: slot_id.to_string(),
            label: label.to_string(),
            max_participants,
        });
        self
    }

    pub fn slots(mut self, v: Vec<NewTimeSlot>) -> Self {
        self.inner.slots = v;
        self
    }

    pub fn build(self) -> CreateGathering {
        self.inner
    }
}

pub struct UpdateGatheringBuilder {
    inner: UpdateGathering,
}

impl Default for UpdateGatheringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateGatheringBuilder {
    pub fn new() -> Self {
        Self {
            inner: UpdateGathering {
                gathering_id: "gat-fixed-0001".to_string(),
                title: "Spring tea gathering".to_string(),
                venue: "Kouetsu-an".to_string(),
                held_on: "2026-04-29".to_string(),
                cost_per_person: 1500,
                description: "A quiet morning seating.".to_string(),
                image_url: None,
                is_active: true,
                occurred_at: OCCURRED_AT + 1,
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn cost_per_person(mut self, v: i64) -> Self {
        self.inner.cost_per_person = v;
        self
    }

    pub fn is_active(mut self, v: bool) -> Self {
        self.inner.is_active = v;
        self
    }

    pub fn build(self) -> UpdateGathering {
        self.inner
    }
}

pub struct PlaceReservationBuilder {
    inner: PlaceReservation,
}

impl Default for PlaceReservationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceReservationBuilder {
    pub fn new() -> Self {
        Self {
            inner: PlaceReservation {
                gathering_id: "gat-fixed-0001".to_string(),
                reservation_id: "res-fixed-0001".to_string(),
                slot_id: "slot-fixed-0001".to_string(),
                reservation_number: 123_456,
                guest_name: "Sen Rikyu".to_string(),
                email: "rikyu@example.jp".to_string(),
                phone: "090-0000-0000".to_string(),
                party_size: 2,
                companions: vec![],
                notes: String::new(),
                occurred_at: OCCURRED_AT,
            },
        }
    }

    pub fn reservation_id(mut self, v: impl Into<String>) -> Self {
        self.inner.reservation_id = v.into();
        self
    }

    pub fn slot_id(mut self, v: impl Into<String>) -> Self {
        self.inner.slot_id = v.into();
        self
    }

    pub fn reservation_number(mut self, v: u32) -> Self {
        self.inner.reservation_number = v;
        self
    }

    pub fn guest_name(mut self, v: impl Into<String>) -> Self {
        self.inner.guest_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn party_size(mut self, v: i64) -> Self {
        self.inner.party_size = v;
        self
    }

    pub fn companions(mut self, v: Vec<String>) -> Self {
        self.inner.companions = v;
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = v.into();
        self
    }

    pub fn build(self) -> PlaceReservation {
        self.inner
    }
}

pub struct ChangeReservationBuilder {
    inner: ChangeReservation,
}

impl Default for ChangeReservationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeReservationBuilder {
    pub fn new() -> Self {
        Self {
            inner: ChangeReservation {
                gathering_id: "gat-fixed-0001".to_string(),
                reservation_id: "res-fixed-0001".to_string(),
                slot_id: "slot-fixed-0001".to_string(),
                guest_name: "Sen Rikyu".to_string(),
                email: "rikyu@example.jp".to_string(),
                phone: "090-0000-0000".to_string(),
                party_size: 2,
                companions: vec![],
                notes: String::new(),
                occurred_at: OCCURRED_AT + 1,
            },
        }
    }

    pub fn reservation_id(mut self, v: impl Into<String>) -> Self {
        self.inner.reservation_id = v.into();
        self
    }

    pub fn slot_id(mut self, v: impl Into<String>) -> Self {
        self.inner.slot_id = v.into();
        self
    }

    pub fn party_size(mut self, v: i64) -> Self {
        self.inner.party_size = v;
        self
    }

    pub fn companions(mut self, v: Vec<String>) -> Self {
        self.inner.companions = v;
        self
    }

    pub fn build(self) -> ChangeReservation {
        self.inner
    }
}
