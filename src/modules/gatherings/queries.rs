// Read-side port and view rows.
//
// Views are what the routes serialize: the aggregate keeps its own shape
// private and the projector maps folded state into these rows.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlotView {
    pub slot_id: String,
    pub label: String,
    pub max_participants: i64,
    pub current_participants: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatheringView {
    pub gathering_id: String,
    pub title: String,
    pub venue: String,
    pub held_on: String,
    pub cost_per_person: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub max_participants: i64,
    pub current_participants: i64,
    pub slots: Vec<TimeSlotView>,
    /// Stream version; admin mutations echo this back as expected_version.
    pub version: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservationView {
    pub reservation_id: String,
    pub gathering_id: String,
    pub slot_id: String,
    pub slot_label: String,
    pub reservation_number: u32,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub party_size: i64,
    pub companions: Vec<String>,
    pub total_cost: i64,
    pub notes: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// One admin list group: a slot and the reservations booked into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotReservationsView {
    pub slot: TimeSlotView,
    pub reservations: Vec<ReservationView>,
}

/// A reservation holder, aggregated over every reservation with their email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestView {
    pub email: String,
    pub guest_name: String,
    pub phone: String,
    pub reservation_count: u64,
    pub total_participants: i64,
}

#[async_trait]
pub trait CatalogQueries: Send + Sync {
    async fn list_gatherings(&self, only_active: bool) -> anyhow::Result<Vec<GatheringView>>;

    async fn get_gathering(&self, gathering_id: &str) -> anyhow::Result<Option<GatheringView>>;

    /// A gathering's reservations grouped by its slots, in slot order.
    async fn list_reservations(
        &self,
        gathering_id: &str,
    ) -> anyhow::Result<Vec<SlotReservationsView>>;

    /// The owner lookup flow: gathering plus 6-digit number.
    async fn find_reservation(
        &self,
        gathering_id: &str,
        reservation_number: u32,
    ) -> anyhow::Result<Option<ReservationView>>;

    async fn list_guests(&self) -> anyhow::Result<Vec<GuestView>>;
}
