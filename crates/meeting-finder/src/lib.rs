//! # meeting-finder
//!
//! Find the windows in a day where a meeting of a given length fits around
//! everyone's existing schedule.
//!
//! Given the day's events (each a time range plus its attendees) and a
//! [`MeetingRequest`] (a duration, mandatory attendees, optional attendees), the
//! resolver returns the ordered free windows long enough for the meeting. All
//! computation is pure and in-memory.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_finder::{find_meeting_times, Event, MeetingRequest, TimeRange, DAY_LENGTH};
//!
//! let standup = TimeRange::from_start_end(60, 120, false).unwrap();
//! let events = vec![Event::new("standup", standup, ["A"])];
//! let request = MeetingRequest::new(30, ["A"]).unwrap();
//!
//! let windows = find_meeting_times(&events, &request);
//! assert_eq!(windows[0], TimeRange::from_start_end(0, 60, false).unwrap());
//! assert_eq!(windows[1].end(), DAY_LENGTH);
//! ```
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange` and day constants
//! - [`event`] — `Event` and `MeetingRequest`
//! - [`conflict`] — Collect the ranges that clash with an attendee set
//! - [`merge`] — Flatten and combine start-ordered range sets
//! - [`freebusy`] — Extract free gaps around a conflict set
//! - [`availability`] — The resolver pipeline and its fallback policy
//! - [`error`] — Error types

pub mod availability;
pub mod conflict;
pub mod error;
pub mod event;
pub mod freebusy;
pub mod merge;
pub mod range;

pub use availability::{busy_ranges, find_meeting_times, resolve, Availability, Coverage};
pub use conflict::{collect_conflicts, ConflictMap};
pub use error::MeetingError;
pub use event::{Event, MeetingRequest};
pub use freebusy::{extract_gaps, first_gap};
pub use merge::{combine, flatten, RangeFlattener};
pub use range::{minutes_of, TimeRange, DAY_LENGTH, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
