//! Flatten and combine start-ordered range sets.
//!
//! Only strictly overlapping ranges are merged. Ranges that touch, where one
//! ends on the minute the next begins, stay as separate entries.

use crate::range::TimeRange;

/// Accumulates start-ordered ranges into a non-overlapping sequence.
///
/// At most one range is open at a time. [`RangeFlattener::finish`] consumes the
/// builder and emits the open range, so it can run only once.
#[derive(Debug, Default)]
pub struct RangeFlattener {
    flat: Vec<TimeRange>,
    open: Option<TimeRange>,
}

impl RangeFlattener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next range. Its start must not precede any range already pushed.
    pub fn push(&mut self, range: TimeRange) {
        if let Some(open) = self.open.as_mut() {
            if range.start() < open.end() {
                open.stretch_to(range.end());
                return;
            }
        }
        // Touching or disjoint: close the open range and start a new one.
        self.flat.extend(self.open.replace(range));
    }

    /// Emit the open range, if any, and return the flattened sequence.
    pub fn finish(mut self) -> Vec<TimeRange> {
        self.flat.extend(self.open.take());
        self.flat
    }
}

impl Extend<TimeRange> for RangeFlattener {
    fn extend<I: IntoIterator<Item = TimeRange>>(&mut self, iter: I) {
        for range in iter {
            self.push(range);
        }
    }
}

/// Merge start-ordered, possibly overlapping ranges into the minimal
/// non-overlapping sequence covering the same minutes.
///
/// The input is not re-sorted.
pub fn flatten<I>(ranges: I) -> Vec<TimeRange>
where
    I: IntoIterator<Item = TimeRange>,
{
    let mut flattener = RangeFlattener::new();
    flattener.extend(ranges);
    flattener.finish()
}

/// Union of two flattened, start-ordered range sets.
///
/// A two-pointer walk feeds whichever front range starts first into a single
/// flattener. Ranges sharing a start go shortest first, so a zero-length range
/// is closed before the longer one opens and the result does not depend on
/// argument order.
pub fn combine(a: &[TimeRange], b: &[TimeRange]) -> Vec<TimeRange> {
    let mut flattener = RangeFlattener::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            flattener.push(a[i]);
            i += 1;
        } else {
            flattener.push(b[j]);
            j += 1;
        }
    }
    flattener.extend(a[i..].iter().copied());
    flattener.extend(b[j..].iter().copied());

    flattener.finish()
}
