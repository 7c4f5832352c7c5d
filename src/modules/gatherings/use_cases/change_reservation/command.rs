// Command data type for changing a reservation.
//
// Carries the full target shape; the decider reads the previous slot binding
// and party size from state to build the dual adjustment.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReservation {
    pub gathering_id: String,
    pub reservation_id: String,
    pub slot_id: String,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub party_size: i64,
    pub companions: Vec<String>,
    pub notes: String,
    pub occurred_at: i64,
}
