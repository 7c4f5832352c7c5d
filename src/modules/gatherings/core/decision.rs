// Rejection taxonomy shared by every decide function.

use crate::modules::gatherings::core::state::{Gathering, GatheringState};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("gathering already exists")]
    AlreadyExists,

    #[error("gathering not found")]
    UnknownGathering,

    #[error("gathering was removed")]
    GatheringRemoved,

    #[error("time slot not found")]
    UnknownTimeSlot,

    #[error("time slot is full: requested {requested}, seats left {available}")]
    SlotFull { requested: i64, available: i64 },

    #[error("reservation not found")]
    UnknownReservation,

    #[error("reservation number already in use")]
    ReservationNumberTaken,

    #[error("party size must be at least one")]
    EmptyParty,

    #[error("at most three companions can be named")]
    TooManyCompanions,

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("cost per person must not be negative")]
    NegativeCost,

    #[error("slot label must not be empty")]
    EmptySlotLabel,

    #[error("slot capacity must not be negative")]
    NegativeCapacity,

    #[error("duplicate slot label")]
    DuplicateSlotLabel,
}

/// How many named companions a reservation may carry.
pub const MAX_COMPANIONS: usize = 3;

/// Every command except creation requires a live gathering.
pub fn require_open(state: &GatheringState) -> Result<&Gathering, DecideError> {
    match state {
        GatheringState::Open(gathering) => Ok(gathering),
        GatheringState::None => Err(DecideError::UnknownGathering),
        GatheringState::Removed => Err(DecideError::GatheringRemoved),
    }
}
