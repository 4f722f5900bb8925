//! Collect the time ranges that clash with a set of attendees.
//!
//! An event conflicts with an attendee set when the two share at least one
//! identifier. Conflicting ranges are keyed by start minute; when two
//! conflicting events start together only the longer range is kept, since
//! the shorter one is covered by it.

use std::collections::{BTreeMap, HashSet};

use crate::event::Event;
use crate::range::TimeRange;

/// Conflicting ranges keyed by their start minute, at most one per start.
pub type ConflictMap = BTreeMap<u32, TimeRange>;

/// Gather the ranges of every event that involves someone in `attendees`.
///
/// Iterating the returned map yields ranges in start order, which is what
/// [`crate::merge::flatten`] expects.
pub fn collect_conflicts(events: &[Event], attendees: &HashSet<String>) -> ConflictMap {
    let mut conflicts = ConflictMap::new();
    if attendees.is_empty() {
        return conflicts;
    }

    for event in events.iter().filter(|e| e.involves_any(attendees)) {
        insert_longest(&mut conflicts, event.when);
    }

    tracing::trace!(
        events = events.len(),
        conflicts = conflicts.len(),
        "collected conflicting ranges"
    );
    conflicts
}

/// Record `range`, keeping the longer of two ranges that share a start.
fn insert_longest(conflicts: &mut ConflictMap, range: TimeRange) {
    conflicts
        .entry(range.start())
        .and_modify(|kept| {
            if range.duration() > kept.duration() {
                *kept = range;
            }
        })
        .or_insert(range);
}
