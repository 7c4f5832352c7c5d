// Capacity accounting: the one place participant counters move.
//
// Every mutation that touches a reservation or a slot funnels through these
// functions from `evolve`, keeping the two derived counters in lock step:
// - gathering.current_participants == sum of live reservations' party sizes
// - slot.current_participants == sum of party sizes bound to that slot
//
// Releases clamp at zero. The cap itself is not checked here; deciders
// reject over-capacity demand before an event is ever emitted.
//
// Boundaries
// - No input or output. No side effects beyond the passed-in state.

use crate::modules::gatherings::core::state::{Gathering, TimeSlot};

/// Seat a party: both counters go up by the party size.
pub fn occupy(gathering: &mut Gathering, slot_id: &str, party_size: i64) {
    if let Some(slot) = gathering.slot_mut(slot_id) {
        slot.current_participants += party_size;
    }
    gathering.current_participants += party_size;
}

/// Release a party: both counters go down by the party size, never below zero.
pub fn release(gathering: &mut Gathering, slot_id: &str, party_size: i64) {
    if let Some(slot) = gathering.slot_mut(slot_id) {
        slot.current_participants = (slot.current_participants - party_size).max(0);
    }
    gathering.current_participants = (gathering.current_participants - party_size).max(0);
}

/// Move a party between slots (or resize it within one): release the old
/// binding, occupy the new one. With `from == to` the net effect on both
/// counters is `to_party - from_party`.
pub fn shift(
    gathering: &mut Gathering,
    from_slot: &str,
    from_party: i64,
    to_slot: &str,
    to_party: i64,
) {
    release(gathering, from_slot, from_party);
    occupy(gathering, to_slot, to_party);
}

/// A slot fell away: its reservations are gone, so the gathering counter
/// drops by everything that was seated there.
pub fn release_all(gathering: &mut Gathering, released_participants: i64) {
    gathering.current_participants =
        (gathering.current_participants - released_participants).max(0);
}

pub fn total_capacity(slots: &[TimeSlot]) -> i64 {
    slots.iter().map(|slot| slot.max_participants).sum()
}

/// Recompute the gathering capacity after any slot change.
pub fn refresh_capacity(gathering: &mut Gathering) {
    gathering.max_participants = total_capacity(&gathering.slots);
}
