//! Closed-interval exercises: `[start, end]` with `start <= end`.
//!
//! Two intervals overlap when `b.start <= a.end`; touching endpoints merge.
//! Meetings are half-open: one ending at `t` does not clash with one
//! starting at `t`.

pub mod greedy;
pub mod merge;
pub mod rooms;

pub use greedy::{can_attend_meetings, erase_overlap_intervals};
pub use merge::{insert, merge};
pub use rooms::min_meeting_rooms;

use crate::sorting::quick_sort_by;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }
}

impl From<(i32, i32)> for Interval {
    fn from((start, end): (i32, i32)) -> Self {
        Self { start, end }
    }
}

impl From<[i32; 2]> for Interval {
    fn from([start, end]: [i32; 2]) -> Self {
        Self { start, end }
    }
}

fn sorted_by_start(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    quick_sort_by(&mut sorted, &mut |a: &Interval, b: &Interval| a.start.cmp(&b.start));
    sorted
}
