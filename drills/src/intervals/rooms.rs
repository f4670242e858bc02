use crate::data_structures::MinHeap;

use super::{sorted_by_start, Interval};

/// Rooms needed to host every meeting.
///
/// A min-heap holds the end time of each occupied room; a meeting reuses the
/// room that frees up earliest if it has already ended.
pub fn min_meeting_rooms(intervals: &[Interval]) -> usize {
    let mut ends: MinHeap<i32> = MinHeap::new();
    for iv in sorted_by_start(intervals) {
        if ends.peek().is_some_and(|&earliest| iv.start >= earliest) {
            ends.pop();
        }
        ends.push(iv.end);
    }
    ends.len()
}
