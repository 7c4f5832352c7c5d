// Pure decision function for gathering removal.

use crate::modules::gatherings::core::decision::{require_open, DecideError};
use crate::modules::gatherings::core::events::v1::gathering::GatheringRemovedV1;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::GatheringState;
use crate::modules::gatherings::use_cases::remove_gathering::command::RemoveGathering;

pub fn decide_remove(
    state: &GatheringState,
    command: RemoveGathering,
) -> Result<Vec<GatheringEvent>, DecideError> {
    let gathering = require_open(state)?;

    Ok(vec![GatheringEvent::GatheringRemovedV1(GatheringRemovedV1 {
        gathering_id: gathering.gathering_id.clone(),
        occurred_at: command.occurred_at,
    })])
}
