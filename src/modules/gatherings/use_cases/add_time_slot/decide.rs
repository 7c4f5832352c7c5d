// Pure decision function for adding a time slot.
//
// The gathering capacity is the sum of its slots, so the fold recomputes it
// whenever a slot appears.

use crate::modules::gatherings::core::decision::{require_open, DecideError};
use crate::modules::gatherings::core::events::v1::time_slots::TimeSlotAddedV1;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::GatheringState;
use crate::modules::gatherings::use_cases::add_time_slot::command::AddTimeSlot;

pub fn decide_add_slot(
    state: &GatheringState,
    command: AddTimeSlot,
) -> Result<Vec<GatheringEvent>, DecideError> {
    let gathering = require_open(state)?;
    if command.label.trim().is_empty() {
        return Err(DecideError::EmptySlotLabel);
    }
    if command.max_participants < 0 {
        return Err(DecideError::NegativeCapacity);
    }
    if gathering.slots.iter().any(|slot| slot.label == command.label) {
        return Err(DecideError::DuplicateSlotLabel);
    }

    Ok(vec![GatheringEvent::TimeSlotAddedV1(TimeSlotAddedV1 {
        slot_id: command.slot_id,
        label: command.label,
        max_participants: command.max_participants,
        occurred_at: command.occurred_at,
    })])
}

#[cfg(test)]
mod add_time_slot_decide_tests {
    use super::*;
    use crate::modules::gatherings::core::evolve::evolve;
    use crate::modules::gatherings::core::state::GatheringState;
    use crate::test_support::fixtures::states::{open_gathering, OCCURRED_AT};
    use rstest::rstest;

    fn command(label: &str) -> AddTimeSlot {
        AddTimeSlot {
            gathering_id: "gat-fixed-0001".to_string(),
            slot_id: "slot-fixed-0002".to_string(),
            label: label.to_string(),
            max_participants: 6,
            occurred_at: OCCURRED_AT + 1,
        }
    }

    #[rstest]
    fn it_should_grow_the_gathering_capacity() {
        let state = open_gathering();
        let events =
            decide_add_slot(&state, command("13:00")).expect("expected slot to be accepted");
        let state = events
            .into_iter()
            .fold(state, |state, event| evolve(state, event));
        match state {
            GatheringState::Open(gathering) => {
                assert_eq!(gathering.slots.len(), 2);
                assert_eq!(gathering.max_participants, 16);
            }
            other => panic!("expected Open state, got {other:?}"),
        }
    }

    #[rstest]
    fn it_should_reject_a_duplicate_label() {
        let state = open_gathering();
        assert_eq!(
            decide_add_slot(&state, command("10:00")),
            Err(DecideError::DuplicateSlotLabel)
        );
    }

    #[rstest]
    fn it_should_reject_a_blank_label() {
        let state = open_gathering();
        assert_eq!(
            decide_add_slot(&state, command(" ")),
            Err(DecideError::EmptySlotLabel)
        );
    }
}
