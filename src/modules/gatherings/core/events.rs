// Root event enumeration for a gathering stream and re-exports of versioned
// payloads.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new
//   version and a new variant.
// - Do not change the meaning of historical events.

pub mod v1 {
    pub mod gathering;
    pub mod reservations;
    pub mod time_slots;
}

use self::v1::gathering::{GatheringCreatedV1, GatheringRemovedV1, GatheringUpdatedV1};
use self::v1::reservations::{ReservationCancelledV1, ReservationChangedV1, ReservationPlacedV1};
use self::v1::time_slots::{TimeSlotAddedV1, TimeSlotRemovedV1, TimeSlotUpdatedV1};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum GatheringEvent {
    GatheringCreatedV1(GatheringCreatedV1),
    GatheringUpdatedV1(GatheringUpdatedV1),
    GatheringRemovedV1(GatheringRemovedV1),
    TimeSlotAddedV1(TimeSlotAddedV1),
    TimeSlotUpdatedV1(TimeSlotUpdatedV1),
    TimeSlotRemovedV1(TimeSlotRemovedV1),
    ReservationPlacedV1(ReservationPlacedV1),
    ReservationChangedV1(ReservationChangedV1),
    ReservationCancelledV1(ReservationCancelledV1),
}
