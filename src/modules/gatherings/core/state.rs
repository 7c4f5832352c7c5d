// GatheringState is the canonical domain state after folding events.
//
// A gathering owns its time slots and its reservations: the whole booking
// picture for one tea gathering lives in a single stream, so every counter
// adjustment happens inside one atomic append.
//
// Boundaries
// - This file must not perform input or output.
// - Keep it framework-free.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatheringState {
    None,
    Open(Gathering),
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gathering {
    pub gathering_id: String,
    pub title: String,
    pub venue: String,
    /// Display date label, stored verbatim (e.g. "2026-04-29 (Sun)").
    pub held_on: String,
    /// Whole currency units per seat.
    pub cost_per_person: i64,
    pub description: String,
    pub image_url: Option<String>,
    /// Public visibility flag. Gates listing, not booking.
    pub is_active: bool,
    /// Always the sum of the slots' capacities.
    pub max_participants: i64,
    /// Always the sum of the live reservations' party sizes.
    pub current_participants: i64,
    pub slots: Vec<TimeSlot>,
    pub reservations: Vec<Reservation>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub slot_id: String,
    /// The time label shown to guests, e.g. "10:00".
    pub label: String,
    pub max_participants: i64,
    pub current_participants: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_id: String,
    /// Slot reference by identifier only, never by label.
    pub slot_id: String,
    /// Human-facing 6-digit number, unique within the gathering.
    pub reservation_number: u32,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub party_size: i64,
    /// Up to three named accompanying guests.
    pub companions: Vec<String>,
    /// cost_per_person at write time multiplied by party_size. Frozen; price
    /// edits on the gathering do not retro-adjust it.
    pub total_cost: i64,
    pub notes: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Gathering {
    pub fn slot(&self, slot_id: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.slot_id == slot_id)
    }

    pub fn slot_mut(&mut self, slot_id: &str) -> Option<&mut TimeSlot> {
        self.slots.iter_mut().find(|slot| slot.slot_id == slot_id)
    }

    pub fn reservation(&self, reservation_id: &str) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|reservation| reservation.reservation_id == reservation_id)
    }

    pub fn reservation_mut(&mut self, reservation_id: &str) -> Option<&mut Reservation> {
        self.reservations
            .iter_mut()
            .find(|reservation| reservation.reservation_id == reservation_id)
    }

    pub fn number_taken(&self, reservation_number: u32) -> bool {
        self.reservations
            .iter()
            .any(|reservation| reservation.reservation_number == reservation_number)
    }
}

#[cfg(test)]
mod gathering_state_tests {
    use super::*;
    use rstest::rstest;

    fn slot(slot_id: &str, label: &str) -> TimeSlot {
        TimeSlot {
            slot_id: slot_id.to_string(),
            label: label.to_string(),
            max_participants: 10,
            current_participants: 0,
        }
    }

    fn gathering() -> Gathering {
        Gathering {
            gathering_id: "gat-fixed-0001".to_string(),
            title: "Spring tea gathering".to_string(),
            venue: "Kouetsu-an".to_string(),
            held_on: "2026-04-29".to_string(),
            cost_per_person: 1500,
            description: String::new(),
            image_url: None,
            is_active: true,
            max_participants: 20,
            current_participants: 0,
            slots: vec![slot("slot-a", "10:00"), slot("slot-b", "13:00")],
            reservations: vec![],
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_000,
        }
    }

    #[rstest]
    fn it_should_find_a_slot_by_id() {
        let state = gathering();
        assert_eq!(state.slot("slot-b").map(|s| s.label.as_str()), Some("13:00"));
        assert!(state.slot("slot-c").is_none());
    }

    #[rstest]
    fn it_should_report_taken_reservation_numbers() {
        let mut state = gathering();
        assert!(!state.number_taken(123_456));
        state.reservations.push(Reservation {
            reservation_id: "res-fixed-0001".to_string(),
            slot_id: "slot-a".to_string(),
            reservation_number: 123_456,
            guest_name: "Sen Rikyu".to_string(),
            email: "rikyu@example.jp".to_string(),
            phone: "090-0000-0000".to_string(),
            party_size: 2,
            companions: vec![],
            total_cost: 3000,
            notes: String::new(),
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_000,
        });
        assert!(state.number_taken(123_456));
    }
}
