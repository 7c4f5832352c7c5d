// Applies read-model mutations produced by the core mapping.
//
// Projection runs synchronously inside the command handler, right after the
// append, so reads are current the moment a mutation returns.

use crate::modules::gatherings::adapters::projections::GatheringProjectionRepository;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::projections::{apply, Mutation};
use crate::modules::gatherings::core::state::GatheringState;
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository>
where
    TRepository: GatheringProjectionRepository + Send + Sync + 'static,
{
    pub repository: Arc<TRepository>,
}

impl<TRepository> Projector<TRepository>
where
    TRepository: GatheringProjectionRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn apply_one(
        &self,
        state: &GatheringState,
        version: i64,
        event: &GatheringEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(state, version, event) {
            match mutation {
                Mutation::UpsertGathering(view) => self.repository.upsert_gathering(view).await?,
                Mutation::RemoveGathering { gathering_id } => {
                    self.repository.remove_gathering(&gathering_id).await?
                }
                Mutation::UpsertReservation(view) => {
                    self.repository.upsert_reservation(view).await?
                }
                Mutation::RemoveReservation { reservation_id } => {
                    self.repository.remove_reservation(&reservation_id).await?
                }
            }
        }
        Ok(())
    }
}
