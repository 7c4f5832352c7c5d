// Reservation payloads. A change records the previous slot binding and party
// size so the fold can move seats between slots without looking anything up.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationPlacedV1 {
    pub reservation_id: String,
    pub slot_id: String,
    pub reservation_number: u32,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub party_size: i64,
    pub companions: Vec<String>,
    pub total_cost: i64,
    pub notes: String,
    pub occurred_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationChangedV1 {
    pub reservation_id: String,
    pub slot_id: String,
    pub previous_slot_id: String,
    pub party_size: i64,
    pub previous_party_size: i64,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub companions: Vec<String>,
    pub total_cost: i64,
    pub notes: String,
    pub occurred_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationCancelledV1 {
    pub reservation_id: String,
    pub slot_id: String,
    pub party_size: i64,
    pub occurred_at: i64,
}
