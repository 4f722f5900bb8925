//! Compute the free windows left around a flattened conflict set.
//!
//! Walks the conflicts with a cursor starting at [`START_OF_DAY`], emitting each
//! gap long enough for the meeting. The trailing gap runs through
//! [`END_OF_DAY`] inclusive.

use crate::range::{TimeRange, DAY_LENGTH, END_OF_DAY, START_OF_DAY};

/// Find every gap of at least `min_duration` minutes around `conflicts`.
///
/// `conflicts` must be flattened and start-ordered. A conflict always moves the
/// cursor to its end, even when the gap before it was too short to keep.
pub fn extract_gaps(conflicts: &[TimeRange], min_duration: u32) -> Vec<TimeRange> {
    let mut gaps = Vec::new();
    let mut cursor = START_OF_DAY;

    for conflict in conflicts {
        if conflict.start() >= cursor && conflict.start() - cursor >= min_duration {
            gaps.push(TimeRange::spanning(cursor, conflict.start()));
        }
        cursor = conflict.end();
    }

    // Trailing window, measured against the last minute of the day.
    if cursor <= END_OF_DAY && END_OF_DAY - cursor >= min_duration {
        gaps.push(TimeRange::spanning(cursor, DAY_LENGTH));
    }

    gaps
}

/// First gap of at least `min_duration` minutes, if one exists.
pub fn first_gap(conflicts: &[TimeRange], min_duration: u32) -> Option<TimeRange> {
    extract_gaps(conflicts, min_duration).into_iter().next()
}
