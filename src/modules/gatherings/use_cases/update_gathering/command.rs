// Command data type for editing a gathering's metadata and visibility.
//
// Slot changes travel as their own commands; this one never touches
// capacity or counters.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGathering {
    pub gathering_id: String,
    pub title: String,
    pub venue: String,
    pub held_on: String,
    pub cost_per_person: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub occurred_at: i64,
}
