// Command data type for editing a time slot's label or capacity.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTimeSlot {
    pub gathering_id: String,
    pub slot_id: String,
    pub label: String,
    pub max_participants: i64,
    pub occurred_at: i64,
}
