// Time slot payloads. Removal carries its cascade so that folding never has
// to re-derive which reservations fell with the slot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlotAddedV1 {
    pub slot_id: String,
    pub label: String,
    pub max_participants: i64,
    pub occurred_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlotUpdatedV1 {
    pub slot_id: String,
    pub label: String,
    pub max_participants: i64,
    pub occurred_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlotRemovedV1 {
    pub slot_id: String,
    /// Reservations bound to the slot at removal time, cancelled with it.
    pub cancelled_reservation_ids: Vec<String>,
    /// Sum of the cancelled reservations' party sizes, released from the
    /// gathering counter.
    pub released_participants: i64,
    pub occurred_at: i64,
}
