// Pure decision function for time slot edits.
//
// Shrinking a slot below its current occupancy is allowed: existing
// reservations are never cancelled by a capacity edit, the cap only gates
// new demand.

use crate::modules::gatherings::core::decision::{require_open, DecideError};
use crate::modules::gatherings::core::events::v1::time_slots::TimeSlotUpdatedV1;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::GatheringState;
use crate::modules::gatherings::use_cases::update_time_slot::command::UpdateTimeSlot;

pub fn decide_update_slot(
    state: &GatheringState,
    command: UpdateTimeSlot,
) -> Result<Vec<GatheringEvent>, DecideError> {
    let gathering = require_open(state)?;
    if gathering.slot(&command.slot_id).is_none() {
        return Err(DecideError::UnknownTimeSlot);
    }
    if command.label.trim().is_empty() {
        return Err(DecideError::EmptySlotLabel);
    }
    if command.max_participants < 0 {
        return Err(DecideError::NegativeCapacity);
    }
    if gathering
        .slots
        .iter()
        .any(|slot| slot.slot_id != command.slot_id && slot.label == command.label)
    {
        return Err(DecideError::DuplicateSlotLabel);
    }

    Ok(vec![GatheringEvent::TimeSlotUpdatedV1(TimeSlotUpdatedV1 {
        slot_id: command.slot_id,
        label: command.label,
        max_participants: command.max_participants,
        occurred_at: command.occurred_at,
    })])
}

#[cfg(test)]
mod update_time_slot_decide_tests {
    use super::*;
    use crate::modules::gatherings::core::evolve::evolve;
    use crate::test_support::fixtures::states::{gathering_with_reservation, open_gathering, OCCURRED_AT};
    use rstest::rstest;

    fn command(slot_id: &str, max_participants: i64) -> UpdateTimeSlot {
        UpdateTimeSlot {
            gathering_id: "gat-fixed-0001".to_string(),
            slot_id: slot_id.to_string(),
            label: "10:30".to_string(),
            max_participants,
            occurred_at: OCCURRED_AT + 1,
        }
    }

    #[rstest]
    fn it_should_decide_to_update_the_slot() {
        let state = open_gathering();
        let events = decide_update_slot(&state, command("slot-fixed-0001", 12))
            .expect("expected update to be accepted");
        let state = events
            .into_iter()
            .fold(state, |state, event| evolve(state, event));
        match state {
            GatheringState::Open(gathering) => {
                assert_eq!(gathering.slots[0].label, "10:30");
                assert_eq!(gathering.max_participants, 12);
            }
            other => panic!("expected Open state, got {other:?}"),
        }
    }

    #[rstest]
    fn it_should_reject_an_unknown_slot() {
        let state = open_gathering();
        assert_eq!(
            decide_update_slot(&state, command("slot-unknown", 12)),
            Err(DecideError::UnknownTimeSlot)
        );
    }

    #[rstest]
    fn it_should_allow_shrinking_below_current_occupancy() {
        // Two seats taken, capacity cut to one. The edit goes through and the
        // occupancy invariant becomes soft until guests leave.
        let state = gathering_with_reservation("res-fixed-0001", 2);
        let events = decide_update_slot(&state, command("slot-fixed-0001", 1))
            .expect("expected shrink to be accepted");
        let state = events
            .into_iter()
            .fold(state, |state, event| evolve(state, event));
        match state {
            GatheringState::Open(gathering) => {
                assert_eq!(gathering.slots[0].max_participants, 1);
                assert_eq!(gathering.slots[0].current_participants, 2);
            }
            other => panic!("expected Open state, got {other:?}"),
        }
    }
}
