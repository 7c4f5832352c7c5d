// Gathering command handler: the one write path.
//
// Responsibilities
// - Load past events from the event store and fold them into state.
// - Check the caller-supplied expected version (admin edits), rejecting
//   stale writes.
// - Call the decider for the command.
// - Append new events with optimistic concurrency.
// - Project the new events into the read model.
//
// Because a gathering, its slots, and its reservations share one stream,
// the append is the transactional boundary: either every counter adjustment
// of a mutation lands, or none does.

use crate::modules::gatherings::adapters::projections::GatheringProjectionRepository;
use crate::modules::gatherings::core::decision::DecideError;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::evolve::evolve;
use crate::modules::gatherings::core::state::GatheringState;
use crate::modules::gatherings::projector::Projector;
use crate::modules::gatherings::use_cases::add_time_slot::command::AddTimeSlot;
use crate::modules::gatherings::use_cases::add_time_slot::decide::decide_add_slot;
use crate::modules::gatherings::use_cases::cancel_reservation::command::CancelReservation;
use crate::modules::gatherings::use_cases::cancel_reservation::decide::decide_cancel;
use crate::modules::gatherings::use_cases::change_reservation::command::ChangeReservation;
use crate::modules::gatherings::use_cases::change_reservation::decide::decide_change;
use crate::modules::gatherings::use_cases::create_gathering::command::CreateGathering;
use crate::modules::gatherings::use_cases::create_gathering::decide::decide_create;
use crate::modules::gatherings::use_cases::place_reservation::command::PlaceReservation;
use crate::modules::gatherings::use_cases::place_reservation::decide::decide_place;
use crate::modules::gatherings::use_cases::remove_gathering::command::RemoveGathering;
use crate::modules::gatherings::use_cases::remove_gathering::decide::decide_remove;
use crate::modules::gatherings::use_cases::remove_time_slot::command::RemoveTimeSlot;
use crate::modules::gatherings::use_cases::remove_time_slot::decide::decide_remove_slot;
use crate::modules::gatherings::use_cases::update_gathering::command::UpdateGathering;
use crate::modules::gatherings::use_cases::update_gathering::decide::decide_update;
use crate::modules::gatherings::use_cases::update_time_slot::command::UpdateTimeSlot;
use crate::modules::gatherings::use_cases::update_time_slot::decide::decide_update_slot;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error("stale version: expected {expected}, actual {actual}")]
    Stale { expected: i64, actual: i64 },

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("projection failed: {0}")]
    Projection(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatheringCommand {
    Create(CreateGathering),
    Update(UpdateGathering),
    Remove(RemoveGathering),
    AddSlot(AddTimeSlot),
    UpdateSlot(UpdateTimeSlot),
    RemoveSlot(RemoveTimeSlot),
    Place(PlaceReservation),
    Change(ChangeReservation),
    Cancel(CancelReservation),
}

impl GatheringCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create_gathering",
            Self::Update(_) => "update_gathering",
            Self::Remove(_) => "remove_gathering",
            Self::AddSlot(_) => "add_time_slot",
            Self::UpdateSlot(_) => "update_time_slot",
            Self::RemoveSlot(_) => "remove_time_slot",
            Self::Place(_) => "place_reservation",
            Self::Change(_) => "change_reservation",
            Self::Cancel(_) => "cancel_reservation",
        }
    }
}

fn decide(
    state: &GatheringState,
    command: GatheringCommand,
) -> Result<Vec<GatheringEvent>, DecideError> {
    match command {
        GatheringCommand::Create(command) => decide_create(state, command),
        GatheringCommand::Update(command) => decide_update(state, command),
        GatheringCommand::Remove(command) => decide_remove(state, command),
        GatheringCommand::AddSlot(command) => decide_add_slot(state, command),
        GatheringCommand::UpdateSlot(command) => decide_update_slot(state, command),
        GatheringCommand::RemoveSlot(command) => decide_remove_slot(state, command),
        GatheringCommand::Place(command) => decide_place(state, command),
        GatheringCommand::Change(command) => decide_change(state, command),
        GatheringCommand::Cancel(command) => decide_cancel(state, command),
    }
}

pub struct GatheringCommandHandler<TEventStore, TRepository>
where
    TEventStore: EventStore<GatheringEvent> + Send + Sync + 'static,
    TRepository: GatheringProjectionRepository + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    projector: Projector<TRepository>,
}

impl<TEventStore, TRepository> GatheringCommandHandler<TEventStore, TRepository>
where
    TEventStore: EventStore<GatheringEvent> + Send + Sync + 'static,
    TRepository: GatheringProjectionRepository + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>, repository: Arc<TRepository>) -> Self {
        Self {
            event_store,
            projector: Projector::new(repository),
        }
    }

    /// Runs one command against a gathering stream. `expected_version` is the
    /// version the caller last saw; `None` skips the staleness check (public
    /// flows). Returns the stream version after the append.
    pub async fn execute(
        &self,
        gathering_id: &str,
        expected_version: Option<i64>,
        command: GatheringCommand,
    ) -> Result<i64, ApplicationError> {
        let stream_id = format!("Gathering-{gathering_id}");
        let command_name = command.name();

        let stream = self.event_store.load(&stream_id).await?;
        if let Some(expected) = expected_version {
            if expected != stream.version {
                return Err(ApplicationError::Stale {
                    expected,
                    actual: stream.version,
                });
            }
        }

        let mut state = stream
            .events
            .iter()
            .cloned()
            .fold(GatheringState::None, evolve);

        let events = decide(&state, command)?;
        self.event_store
            .append(&stream_id, stream.version, &events)
            .await?;

        let mut version = stream.version;
        for event in &events {
            state = evolve(state, event.clone());
            version += 1;
            self.projector
                .apply_one(&state, version, event)
                .await
                .map_err(|error| {
                    tracing::error!(%stream_id, %error, "read model projection failed");
                    ApplicationError::Projection(error.to_string())
                })?;
        }

        tracing::info!(%gathering_id, command = command_name, version, "command applied");
        Ok(version)
    }
}
