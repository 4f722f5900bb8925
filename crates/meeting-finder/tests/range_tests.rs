//! Tests for `TimeRange` construction, queries, and serde validation.

use meeting_finder::range::clock;
use meeting_finder::{
    minutes_of, MeetingError, TimeRange, DAY_LENGTH, END_OF_DAY, START_OF_DAY, WHOLE_DAY,
};

fn span(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

#[test]
fn start_after_end_is_rejected() {
    assert_eq!(
        TimeRange::from_start_end(120, 60, false),
        Err(MeetingError::InvalidRange {
            start: 120,
            end: 60
        })
    );
}

#[test]
fn range_past_end_of_day_is_rejected() {
    assert_eq!(
        TimeRange::from_start_end(0, DAY_LENGTH, true),
        Err(MeetingError::OutOfDay {
            end: DAY_LENGTH + 1
        })
    );
    assert!(TimeRange::from_start_duration(1400, 60).is_err());
}

#[test]
fn zero_length_range_is_representable() {
    let r = span(60, 60);
    assert!(r.is_empty());
    assert_eq!(r.duration(), 0);
    assert!(!r.contains_point(60));
}

#[test]
fn inclusive_end_is_stored_exclusive() {
    let r = TimeRange::from_start_end(1410, END_OF_DAY, true).unwrap();
    assert_eq!(r.end(), DAY_LENGTH);
    assert_eq!(r.duration(), 30);
    assert!(r.extends_to_end_of_day());
}

#[test]
fn whole_day_constants_agree() {
    assert_eq!(WHOLE_DAY.start(), START_OF_DAY);
    assert_eq!(WHOLE_DAY.duration(), DAY_LENGTH);
    assert_eq!(
        TimeRange::from_start_end(START_OF_DAY, END_OF_DAY, true).unwrap(),
        WHOLE_DAY
    );
}

#[test]
fn overlap_is_strict() {
    let a = span(60, 120);
    assert!(a.overlaps(&span(90, 150)));
    assert!(a.overlaps(&span(70, 80)));
    assert!(!a.overlaps(&span(120, 180)), "touching ranges do not overlap");
    assert!(a.touches(&span(120, 180)));
    assert!(a.touches(&span(0, 60)));
    assert!(!a.touches(&span(130, 180)));
}

#[test]
fn containment() {
    let a = span(60, 120);
    assert!(a.contains(&span(60, 120)));
    assert!(a.contains(&span(70, 80)));
    assert!(!a.contains(&span(50, 80)));
    assert!(a.contains_point(60));
    assert!(!a.contains_point(120));
}

#[test]
fn ordering_sorts_by_start_then_end() {
    let mut ranges = vec![span(90, 100), span(60, 120), span(60, 90)];
    ranges.sort();
    assert_eq!(ranges, vec![span(60, 90), span(60, 120), span(90, 100)]);

    ranges.sort_by(TimeRange::by_end);
    assert_eq!(ranges, vec![span(60, 90), span(90, 100), span(60, 120)]);
}

#[test]
fn by_start_ignores_end() {
    let mut ranges = vec![span(90, 100), span(60, 120), span(30, 200), span(60, 70)];
    ranges.sort_by(TimeRange::by_start);
    // Stable sort keeps the two 01:00 ranges in input order.
    assert_eq!(
        ranges,
        vec![span(30, 200), span(60, 120), span(60, 70), span(90, 100)]
    );
}

#[test]
fn clock_times() {
    assert_eq!(minutes_of(9, 30), Ok(570));
    assert_eq!(minutes_of(23, 59), Ok(END_OF_DAY));
    assert_eq!(
        minutes_of(24, 0),
        Err(MeetingError::InvalidClockTime {
            hours: 24,
            minutes: 0
        })
    );
    assert!(minutes_of(10, 60).is_err());
    assert_eq!(clock(570), "09:30");
    assert_eq!(clock(DAY_LENGTH), "24:00");
}

#[test]
fn display_uses_wall_clock() {
    assert_eq!(WHOLE_DAY.to_string(), "[00:00, 24:00)");
    assert_eq!(span(570, 600).to_string(), "[09:30, 10:00)");
}

#[test]
fn serde_roundtrips_valid_range() {
    let json = serde_json::to_string(&span(60, 120)).unwrap();
    assert_eq!(json, r#"{"start":60,"end":120}"#);
    let back: TimeRange = serde_json::from_str(&json).unwrap();
    assert_eq!(back, span(60, 120));
}

#[test]
fn serde_rejects_malformed_range() {
    let err = serde_json::from_str::<TimeRange>(r#"{"start":120,"end":60}"#).unwrap_err();
    assert!(err.to_string().contains("Invalid time range"));

    assert!(serde_json::from_str::<TimeRange>(r#"{"start":0,"end":2000}"#).is_err());
}
