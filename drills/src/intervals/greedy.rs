use super::{sorted_by_start, Interval};

/// Fewest removals leaving no two intervals overlapping.
///
/// Sweeps by start; on a clash, keeps whichever interval ends first.
pub fn erase_overlap_intervals(intervals: &[Interval]) -> usize {
    let sorted = sorted_by_start(intervals);
    let Some((first, rest)) = sorted.split_first() else {
        return 0;
    };
    let mut end = first.end;
    let mut removed = 0;
    for iv in rest {
        if iv.start < end {
            removed += 1;
            end = end.min(iv.end);
        } else {
            end = iv.end;
        }
    }
    removed
}

/// Whether one person can attend every meeting.
pub fn can_attend_meetings(intervals: &[Interval]) -> bool {
    sorted_by_start(intervals)
        .windows(2)
        .all(|w| w[1].start >= w[0].end)
}
