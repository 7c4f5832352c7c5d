// Outbound port for the read model.
//
// Adapters implement this against whatever holds the views; the projector is
// the only caller.

use crate::modules::gatherings::queries::{GatheringView, ReservationView};
use async_trait::async_trait;

#[async_trait]
pub trait GatheringProjectionRepository: Send + Sync {
    async fn upsert_gathering(&self, view: GatheringView) -> anyhow::Result<()>;

    /// Drops the gathering row and every reservation row that points at it.
    async fn remove_gathering(&self, gathering_id: &str) -> anyhow::Result<()>;

    async fn upsert_reservation(&self, view: ReservationView) -> anyhow::Result<()>;

    async fn remove_reservation(&self, reservation_id: &str) -> anyhow::Result<()>;
}
