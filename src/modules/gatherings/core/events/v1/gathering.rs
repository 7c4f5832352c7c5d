// Lifecycle payloads for the gathering itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotSeed {
    pub slot_id: String,
    pub label: String,
    pub max_participants: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatheringCreatedV1 {
    pub gathering_id: String,
    pub title: String,
    pub venue: String,
    pub held_on: String,
    pub cost_per_person: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub slots: Vec<SlotSeed>,
    pub occurred_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatheringUpdatedV1 {
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

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatheringRemovedV1 {
    pub gathering_id: String,
    pub occurred_at: i64,
}
