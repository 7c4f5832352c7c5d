// Command data type for removing a gathering.
//
// Removal takes the gathering's slots and reservations with it; nothing is
// orphaned.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveGathering {
    pub gathering_id: String,
    pub occurred_at: i64,
}
