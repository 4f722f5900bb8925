//! Error types for meeting-finder construction and validation.

use thiserror::Error;

/// Errors raised when building ranges or requests that would violate the
/// model's invariants. The resolver itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    /// A range whose start lies after its end.
    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidRange { start: u32, end: u32 },

    /// A range that runs past the end of the day.
    #[error("Time range ends at minute {end}, past the end of the day")]
    OutOfDay { end: u32 },

    /// A wall-clock time that does not exist within a day.
    #[error("Invalid clock time {hours:02}:{minutes:02}")]
    InvalidClockTime { hours: u32, minutes: u32 },

    /// A meeting request asking for fewer than zero minutes.
    #[error("Meeting duration must not be negative, got {0}")]
    NegativeDuration(i64),

    /// A meeting request too long to count in minutes.
    #[error("Meeting duration {0} does not fit in a minute count")]
    DurationOverflow(i64),
}

/// Convenience alias used throughout meeting-finder.
pub type Result<T> = std::result::Result<T, MeetingError>;
