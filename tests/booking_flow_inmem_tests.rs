// End to end in memory test for the booking flow.
//
// Walks the reference scenario: a gathering at 1500 per person with one
// ten-seat slot; a party of two books, grows to four, then cancels. Counters
// and total cost are checked through the read model after every step.

use std::sync::Arc;

use chakai::modules::gatherings::adapters::projections_in_memory::InMemoryProjections;
use chakai::modules::gatherings::core::events::GatheringEvent;
use chakai::modules::gatherings::handler::{GatheringCommand, GatheringCommandHandler};
use chakai::modules::gatherings::queries::CatalogQueries;
use chakai::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use chakai::test_support::fixtures::commands::{
    ChangeReservationBuilder, CreateGatheringBuilder, PlaceReservationBuilder,
};

const GATHERING_ID: &str = "gat-fixed-0001";

type Handler = GatheringCommandHandler<InMemoryEventStore<GatheringEvent>, InMemoryProjections>;

fn make_handler() -> (Handler, Arc<InMemoryProjections>) {
    let event_store = Arc::new(InMemoryEventStore::new());
    let projections = Arc::new(InMemoryProjections::new());
    let handler = GatheringCommandHandler::new(event_store, projections.clone());
    (handler, projections)
}

async fn counters(projections: &InMemoryProjections) -> (i64, i64) {
    let view = projections
        .get_gathering(GATHERING_ID)
        .await
        .unwrap()
        .expect("expected the gathering to be projected");
    (view.current_participants, view.slots[0].current_participants)
}

#[tokio::test]
async fn booking_lifecycle_keeps_counters_and_cost_in_step() {
    let (handler, projections) = make_handler();

    handler
        .execute(
            GATHERING_ID,
            None,
            GatheringCommand::Create(CreateGatheringBuilder::new().build()),
        )
        .await
        .expect("create failed");
    assert_eq!(counters(&projections).await, (0, 0));

    handler
        .execute(
            GATHERING_ID,
            None,
            GatheringCommand::Place(PlaceReservationBuilder::new().party_size(2).build()),
        )
        .await
        .expect("place failed");
    assert_eq!(counters(&projections).await, (2, 2));
    let reservation = projections
        .find_reservation(GATHERING_ID, 123_456)
        .await
        .unwrap()
        .expect("expected the reservation to be projected");
    assert_eq!(reservation.total_cost, 3000);

    handler
        .execute(
            GATHERING_ID,
            None,
            GatheringCommand::Change(ChangeReservationBuilder::new().party_size(4).build()),
        )
        .await
        .expect("change failed");
    assert_eq!(counters(&projections).await, (4, 4));
    let reservation = projections
        .find_reservation(GATHERING_ID, 123_456)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reservation.total_cost, 6000);

    handler
        .execute(
            GATHERING_ID,
            None,
            GatheringCommand::Cancel(
                chakai::modules::gatherings::use_cases::cancel_reservation::command::CancelReservation {
                    gathering_id: GATHERING_ID.to_string(),
                    reservation_id: "res-fixed-0001".to_string(),
                    occurred_at: 1_700_000_000_999,
                },
            ),
        )
        .await
        .expect("cancel failed");
    assert_eq!(counters(&projections).await, (0, 0));
    assert!(projections
        .find_reservation(GATHERING_ID, 123_456)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn a_price_edit_does_not_touch_existing_total_costs() {
    let (handler, projections) = make_handler();

    handler
        .execute(
            GATHERING_ID,
            None,
            GatheringCommand::Create(CreateGatheringBuilder::new().build()),
        )
        .await
        .expect("create failed");
    handler
        .execute(
            GATHERING_ID,
            None,
            GatheringCommand::Place(PlaceReservationBuilder::new().party_size(2).build()),
        )
        .await
        .expect("place failed");

    handler
        .execute(
            GATHERING_ID,
            Some(2),
            GatheringCommand::Update(
                chakai::test_support::fixtures::commands::UpdateGatheringBuilder::new()
                    .cost_per_person(2000)
                    .build(),
            ),
        )
        .await
        .expect("update failed");

    let reservation = projections
        .find_reservation(GATHERING_ID, 123_456)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reservation.total_cost, 3000);

    // A change after the price edit re-prices at the new cost.
    handler
        .execute(
            GATHERING_ID,
            None,
            GatheringCommand::Change(ChangeReservationBuilder::new().party_size(2).build()),
        )
        .await
        .expect("change failed");
    let reservation = projections
        .find_reservation(GATHERING_ID, 123_456)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reservation.total_cost, 4000);
}

#[tokio::test]
async fn removing_the_gathering_drops_its_reservations_from_the_read_model() {
    let (handler, projections) = make_handler();

    handler
        .execute(
            GATHERING_ID,
            None,
            GatheringCommand::Create(CreateGatheringBuilder::new().build()),
        )
        .await
        .expect("create failed");
    handler
        .execute(
            GATHERING_ID,
            None,
            GatheringCommand::Place(PlaceReservationBuilder::new().party_size(2).build()),
        )
        .await
        .expect("place failed");

    handler
        .execute(
            GATHERING_ID,
            Some(2),
            GatheringCommand::Remove(
                chakai::modules::gatherings::use_cases::remove_gathering::command::RemoveGathering {
                    gathering_id: GATHERING_ID.to_string(),
                    occurred_at: 1_700_000_000_999,
                },
            ),
        )
        .await
        .expect("remove failed");

    assert!(projections
        .get_gathering(GATHERING_ID)
        .await
        .unwrap()
        .is_none());
    assert!(projections
        .find_reservation(GATHERING_ID, 123_456)
        .await
        .unwrap()
        .is_none());

    // The stream is spent: the id cannot be reused.
    let result = handler
        .execute(
            GATHERING_ID,
            None,
            GatheringCommand::Create(CreateGatheringBuilder::new().build()),
        )
        .await;
    assert!(result.is_err());
}
