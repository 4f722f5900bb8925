//! Scheduled events and meeting requests supplied by the caller.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};
use crate::range::TimeRange;

/// An already-scheduled event on the day being searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display name. Not consulted when resolving availability.
    #[serde(default)]
    pub title: String,
    pub when: TimeRange,
    pub attendees: HashSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any of this event's attendees is in `people`.
    ///
    /// Short-circuits on the first shared identifier.
    pub fn involves_any(&self, people: &HashSet<String>) -> bool {
        self.attendees.iter().any(|a| people.contains(a))
    }
}

/// A request for a meeting of a given length.
///
/// Mandatory and optional attendee sets may overlap; nothing requires them to
/// be disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMeetingRequest")]
pub struct MeetingRequest {
    duration: u32,
    attendees: HashSet<String>,
    optional_attendees: HashSet<String>,
}

#[derive(Deserialize)]
struct RawMeetingRequest {
    duration: i64,
    #[serde(default)]
    attendees: HashSet<String>,
    #[serde(default)]
    optional_attendees: HashSet<String>,
}

impl TryFrom<RawMeetingRequest> for MeetingRequest {
    type Error = MeetingError;

    fn try_from(raw: RawMeetingRequest) -> Result<Self> {
        Ok(MeetingRequest::new(raw.duration, raw.attendees)?
            .with_optional_attendees(raw.optional_attendees))
    }
}

impl MeetingRequest {
    /// Create a request for `duration_minutes` with the given mandatory attendees.
    ///
    /// # Errors
    /// Returns `MeetingError::NegativeDuration` for a negative duration and
    /// `MeetingError::DurationOverflow` if the duration does not fit a `u32`.
    pub fn new<I, S>(duration_minutes: i64, attendees: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if duration_minutes < 0 {
            return Err(MeetingError::NegativeDuration(duration_minutes));
        }
        let duration = u32::try_from(duration_minutes)
            .map_err(|_| MeetingError::DurationOverflow(duration_minutes))?;
        Ok(Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
        })
    }

    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional_attendees.insert(attendee.into());
    }

    pub fn with_optional_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(attendees.into_iter().map(Into::into));
        self
    }

    /// Required meeting length in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &HashSet<String> {
        &self.optional_attendees
    }
}
