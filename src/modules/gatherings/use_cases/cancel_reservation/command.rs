// Command data type for cancelling a reservation.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelReservation {
    pub gathering_id: String,
    pub reservation_id: String,
    pub occurred_at: i64,
}
