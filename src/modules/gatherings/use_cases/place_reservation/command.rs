// Command data type for placing a reservation.
//
// The reservation id, the 6-digit number, and the timestamp are generated at
// the transport edge; the decider only validates and prices.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceReservation {
    pub gathering_id: String,
    pub reservation_id: String,
    pub slot_id: String,
    pub reservation_number: u32,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub party_size: i64,
    pub companions: Vec<String>,
    pub notes: String,
    pub occurred_at: i64,
}
