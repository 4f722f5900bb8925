//! Minute-granularity time ranges within a single day.
//!
//! A [`TimeRange`] is a half-open interval `[start, end)` of minute offsets from
//! midnight. Ranges built with the inclusive flag store `end + 1`, which is how
//! the last gap of a day reaches the [`END_OF_DAY`] sentinel.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day (23:59). Inclusive ranges ending here cover the whole
/// final minute.
pub const END_OF_DAY: u32 = 23 * 60 + 59;

/// Number of minutes in a day.
pub const DAY_LENGTH: u32 = 24 * 60;

/// The entire day, `[00:00, 24:00)`.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: DAY_LENGTH,
};

/// An immutable span of minutes within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = MeetingError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end, false)
    }
}

impl TimeRange {
    /// Build a range from its bounds.
    ///
    /// When `inclusive` is set, `end` itself belongs to the range and the stored
    /// (exclusive) end becomes `end + 1`.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidRange` if `start > end`, and
    /// `MeetingError::OutOfDay` if the range would run past [`DAY_LENGTH`].
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        if start > end {
            return Err(MeetingError::InvalidRange { start, end });
        }
        let end = if inclusive { end.saturating_add(1) } else { end };
        if end > DAY_LENGTH {
            return Err(MeetingError::OutOfDay { end });
        }
        Ok(Self { start, end })
    }

    /// Build a range starting at `start` and lasting `duration` minutes.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = start
            .checked_add(duration)
            .ok_or(MeetingError::OutOfDay { end: u32::MAX })?;
        Self::from_start_end(start, end, false)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// A zero-length range. Representable, but covers no minute.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the range runs through the last minute of the day.
    pub fn extends_to_end_of_day(&self) -> bool {
        self.end == DAY_LENGTH
    }

    /// Strict overlap: ranges that merely touch do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// One range ends exactly where the other begins.
    pub fn touches(&self, other: &TimeRange) -> bool {
        self.end == other.start || other.end == self.start
    }

    pub fn contains_point(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether `other` lies entirely inside this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Build a range from bounds the caller already knows are ordered and
    /// within the day.
    pub(crate) fn spanning(start: u32, end: u32) -> Self {
        debug_assert!(start <= end && end <= DAY_LENGTH, "bad span {start}..{end}");
        Self { start, end }
    }

    /// Push the end out to `end` if that lengthens the range. Both bounds stay
    /// within the day because `end` comes from another valid range.
    pub(crate) fn stretch_to(&mut self, end: u32) {
        self.end = self.end.max(end);
    }

    /// Ordering by start minute, ignoring the end.
    pub fn by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Ordering by end minute, ignoring the start.
    pub fn by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end)
    }
}

impl PartialOrd for TimeRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeRange {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start, self.end).cmp(&(other.start, other.end))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", clock(self.start), clock(self.end))
    }
}

/// Minute offset of a wall-clock time, e.g. `minutes_of(9, 30) == 570`.
///
/// # Errors
/// Returns `MeetingError::InvalidClockTime` for hours outside `0..24` or minutes
/// outside `0..60`.
pub fn minutes_of(hours: u32, minutes: u32) -> Result<u32> {
    if hours >= 24 || minutes >= 60 {
        return Err(MeetingError::InvalidClockTime { hours, minutes });
    }
    Ok(hours * 60 + minutes)
}

/// Format a minute offset as `HH:MM`. The day length renders as `24:00`.
pub fn clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

