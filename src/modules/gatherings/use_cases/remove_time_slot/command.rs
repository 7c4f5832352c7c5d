// Command data type for removing a time slot.
//
// Reservations bound to the slot are cancelled with it; the decider computes
// the cascade so the event carries everything the fold needs.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveTimeSlot {
    pub gathering_id: String,
    pub slot_id: String,
    pub occurred_at: i64,
}
