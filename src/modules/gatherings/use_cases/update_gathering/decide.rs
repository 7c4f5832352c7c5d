// Pure decision function for gathering edits.
//
// A price change applies to future reservations only; existing total costs
// stay frozen at their write-time price.

use crate::modules::gatherings::core::decision::{require_open, DecideError};
use crate::modules::gatherings::core::events::v1::gathering::GatheringUpdatedV1;
use crate::modules::gatherings::core::events::GatheringEvent;
use crate::modules::gatherings::core::state::GatheringState;
use crate::modules::gatherings::use_cases::update_gathering::command::UpdateGathering;

pub fn decide_update(
    state: &GatheringState,
    command: UpdateGathering,
) -> Result<Vec<GatheringEvent>, DecideError> {
    let gathering = require_open(state)?;
    if command.title.trim().is_empty() {
        return Err(DecideError::EmptyTitle);
    }
    if command.cost_per_person < 0 {
        return Err(DecideError::NegativeCost);
    }

    Ok(vec![GatheringEvent::GatheringUpdatedV1(GatheringUpdatedV1 {
        gathering_id: gathering.gathering_id.clone(),
        title: command.title,
        venue: command.venue,
        held_on: command.held_on,
        cost_per_person: command.cost_per_person,
        description: command.description,
        image_url: command.image_url,
        is_active: command.is_active,
        occurred_at: command.occurred_at,
    })])
}

#[cfg(test)]
mod update_gathering_decide_tests {
    use super::*;
    use crate::modules::gatherings::core::evolve::evolve;
    use crate::test_support::fixtures::commands::UpdateGatheringBuilder;
    use crate::test_support::fixtures::states::open_gathering;
    use rstest::rstest;

    #[rstest]
    fn it_should_decide_to_update_the_gathering() {
        let state = open_gathering();
        let command = UpdateGatheringBuilder::new()
            .title("Autumn tea gathering")
            .cost_per_person(2000)
            .build();
        let events = decide_update(&state, command).expect("expected update to be accepted");
        let state = events
            .into_iter()
            .fold(state, |state, event| evolve(state, event));
        match state {
            GatheringState::Open(gathering) => {
                assert_eq!(gathering.title, "Autumn tea gathering");
                assert_eq!(gathering.cost_per_person, 2000);
            }
            other => panic!("expected Open state, got {other:?}"),
        }
    }

    #[rstest]
    fn it_should_reject_an_unknown_gathering() {
        let command = UpdateGatheringBuilder::new().build();
        assert_eq!(
            decide_update(&GatheringState::None, command),
            Err(DecideError::UnknownGathering)
        );
    }

    #[rstest]
    fn it_should_reject_a_removed_gathering() {
        let command = UpdateGatheringBuilder::new().build();
        assert_eq!(
            decide_update(&GatheringState::Removed, command),
            Err(DecideError::GatheringRemoved)
        );
    }

    #[rstest]
    fn it_should_reject_a_blank_title() {
        let state = open_gathering();
        let command = UpdateGatheringBuilder::new().title("").build();
        assert_eq!(decide_update(&state, command), Err(DecideError::EmptyTitle));
    }
}
