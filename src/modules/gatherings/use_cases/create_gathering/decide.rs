// Pure decision function for gathering creation.
//
// Rules
// - The stream must be empty: creating over an existing (or removed)
//   gathering is rejected.
// - Title must not be blank, cost must not be negative, each slot needs a
//   distinct non-blank label and a non-negative capacity.

use std::collections::HashSet;

use crate::modules::gatherings::core::decision::DecideError;
use crate::modules::gatherings::core::events::v1::gathering::{GatheringCreatedV1, SlotSeed};
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::GatheringState;
use crate::modules::gatherings::use_cases::create_gathering::command::CreateGathering;

pub fn decide_create(
    state: &GatheringState,
    command: CreateGathering,
) -> Result<Vec<GatheringEvent>, DecideError> {
    if !matches!(state, GatheringState::None) {
        return Err(DecideError::AlreadyExists);
    }
    if command.title.trim().is_empty() {
        return Err(DecideError::EmptyTitle);
    }
    if command.cost_per_person < 0 {
        return Err(DecideError::NegativeCost);
    }

    {
        let mut labels = HashSet::new();
        for slot in &command.slots {
            if slot.label.trim().is_empty() {
                return Err(DecideError::EmptySlotLabel);
            }
            if slot.max_participants < 0 {
                return Err(DecideError::NegativeCapacity);
            }
            if !labels.insert(slot.label.as_str()) {
                return Err(DecideError::DuplicateSlotLabel);
            }
        }
    }

    Ok(vec![GatheringEvent::GatheringCreatedV1(GatheringCreatedV1 {
        gathering_id: command.gathering_id,
        title: command.title,
        venue: command.venue,
        held_on: command.held_on,
        cost_per_person: command.cost_per_person,
        description: command.description,
        image_url: command.image_url,
        is_active: command.is_active,
        slots: command
            .slots
            .into_iter()
            .map(|slot| SlotSeed {
                slot_id: slot.slot_id,
                label: slot.label,
                max_participants: slot.max_participants,
            })
            .collect(),
        occurred_at: command.occurred_at,
    })])
}
