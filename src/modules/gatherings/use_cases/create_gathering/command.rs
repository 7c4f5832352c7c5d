// Command data type for creating a gathering with its initial time slots.
//
// Responsibilities
// - Carry input data for the decider to validate and convert into an event.
// - Be independent of transport layer details.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeSlot {
    pub slot_id: String,
    pub label: String,
    pub max_participants: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGathering {
    pub gathering_id: String,
    pub title: String,
    pub venue: String,
    pub held_on: String,
    pub cost_per_person: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub slots: Vec<NewTimeSlot>,
    pub occurred_at: i64,
}
