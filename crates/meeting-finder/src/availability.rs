//! Resolve the windows in which a requested meeting can be held.
//!
//! Mandatory and optional conflicts are collected and flattened separately,
//! then combined. Windows that suit everyone win. Failing that, the resolver
//! falls back to windows that suit the mandatory attendees alone, unless the
//! request named no mandatory attendees, in which case nothing is returned.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::conflict::collect_conflicts;
use crate::event::{Event, MeetingRequest};
use crate::freebusy::extract_gaps;
use crate::merge::{combine, flatten};
use crate::range::TimeRange;

/// Which attendees the returned windows account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    /// Every mandatory and optional attendee is free in each window.
    AllAttendees,
    /// Optional attendees could not be accommodated; only mandatory ones are.
    MandatoryOnly,
    /// No window works.
    Nothing,
}

impl Coverage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Coverage::AllAttendees => "all_attendees",
            Coverage::MandatoryOnly => "mandatory_only",
            Coverage::Nothing => "nothing",
        }
    }
}

/// Resolved meeting windows along with how they were obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Sorted, non-overlapping windows, each at least `duration` minutes long.
    pub windows: Vec<TimeRange>,
    pub coverage: Coverage,
    /// The requested meeting length in minutes.
    pub duration: u32,
}

/// Merged busy ranges of everyone named in the request, mandatory or optional.
pub fn busy_ranges(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    combine(
        &flattened_conflicts(events, request.attendees()),
        &flattened_conflicts(events, request.optional_attendees()),
    )
}

fn flattened_conflicts(events: &[Event], attendees: &HashSet<String>) -> Vec<TimeRange> {
    flatten(collect_conflicts(events, attendees).into_values())
}

/// Find every window in which the requested meeting could be held.
///
/// Returns an empty list when no window works; that is a normal outcome, not
/// an error.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    resolve(events, request).windows
}

/// Like [`find_meeting_times`], but also reports which attendees the windows
/// honor.
pub fn resolve(events: &[Event], request: &MeetingRequest) -> Availability {
    let duration = request.duration();

    let mandatory = flattened_conflicts(events, request.attendees());
    let optional = flattened_conflicts(events, request.optional_attendees());
    let combined = combine(&mandatory, &optional);

    tracing::debug!(
        events = events.len(),
        mandatory = mandatory.len(),
        optional = optional.len(),
        combined = combined.len(),
        duration,
        "flattened conflict sets"
    );

    let windows = extract_gaps(&combined, duration);
    if !windows.is_empty() {
        return Availability {
            windows,
            coverage: Coverage::AllAttendees,
            duration,
        };
    }

    // Optional attendees alone cannot agree on a slot; do not fall back to
    // ignoring everyone.
    if request.attendees().is_empty() {
        tracing::debug!("no window for optional attendees and no mandatory attendees");
        return Availability {
            windows: Vec::new(),
            coverage: Coverage::Nothing,
            duration,
        };
    }

    let windows = extract_gaps(&mandatory, duration);
    tracing::debug!(
        windows = windows.len(),
        "falling back to mandatory attendees only"
    );
    let coverage = if windows.is_empty() {
        Coverage::Nothing
    } else {
        Coverage::MandatoryOnly
    };
    Availability {
        windows,
        coverage,
        duration,
    }
}
