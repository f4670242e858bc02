use super::{sorted_by_start, Interval};

/// Insert `new` into sorted, disjoint `intervals`, merging as needed.
pub fn insert(intervals: &[Interval], mut new: Interval) -> Vec<Interval> {
    let mut out = Vec::with_capacity(intervals.len() + 1);
    let mut rest = intervals.iter().copied().peekable();

    while let Some(iv) = rest.next_if(|iv| iv.end < new.start) {
        out.push(iv);
    }
    while let Some(iv) = rest.next_if(|iv| iv.start <= new.end) {
        new.start = new.start.min(iv.start);
        new.end = new.end.max(iv.end);
    }
    out.push(new);
    out.extend(rest);
    out
}

/// Merge overlapping intervals; output sorted by start.
pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
    let sorted = sorted_by_start(intervals);
    let mut out: Vec<Interval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        match out.last_mut() {
            Some(cur) if iv.start <= cur.end => cur.end = cur.end.max(iv.end),
            _ => out.push(iv),
        }
    }
    out
}
