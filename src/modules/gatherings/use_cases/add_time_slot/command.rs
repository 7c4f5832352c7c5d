// Command data type for adding a time slot to an existing gathering.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTimeSlot {
    pub gathering_id: String,
    pub slot_id: String,
    pub label: String,
    pub max_participants: i64,
    pub occurred_at: i64,
}
