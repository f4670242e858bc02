use drills::intervals::{can_attend_meetings, erase_overlap_intervals, insert, merge, min_meeting_rooms, Interval};

fn ivs(pairs: &[(i32, i32)]) -> Vec<Interval> {
    pairs.iter().copied().map(Interval::from).collect()
}

#[test]
fn insert_merges_the_overlapped_run() {
    assert_eq!(insert(&ivs(&[(1, 3), (6, 9)]), Interval::new(2, 5)), ivs(&[(1, 5), (6, 9)]));
    assert_eq!(
        insert(&ivs(&[(1, 2), (3, 5), (6, 7), (8, 10), (12, 16)]), Interval::new(4, 8)),
        ivs(&[(1, 2), (3, 10), (12, 16)])
    );
    assert_eq!(insert(&[], Interval::new(5, 7)), ivs(&[(5, 7)]));
    assert_eq!(insert(&ivs(&[(1, 5)]), Interval::new(6, 8)), ivs(&[(1, 5), (6, 8)]));
    assert_eq!(insert(&ivs(&[(3, 5)]), Interval::new(0, 1)), ivs(&[(0, 1), (3, 5)]));
}

#[test]
fn merge_treats_touching_as_overlapping() {
    assert_eq!(merge(&ivs(&[(1, 3), (2, 6), (8, 10), (15, 18)])), ivs(&[(1, 6), (8, 10), (15, 18)]));
    assert_eq!(merge(&ivs(&[(4, 5), (1, 4)])), ivs(&[(1, 5)]));
    assert_eq!(merge(&ivs(&[(1, 10), (2, 3)])), ivs(&[(1, 10)]));
    assert!(merge(&[]).is_empty());
}

#[test]
fn overlap_removal_counts() {
    assert_eq!(erase_overlap_intervals(&ivs(&[(1, 2), (2, 3), (3, 4), (1, 3)])), 1);
    assert_eq!(erase_overlap_intervals(&ivs(&[(1, 2), (1, 2), (1, 2)])), 2);
    assert_eq!(erase_overlap_intervals(&ivs(&[(1, 2), (2, 3)])), 0);
}

#[test]
fn meeting_rooms() {
    assert!(!can_attend_meetings(&ivs(&[(0, 30), (5, 10), (15, 20)])));
    assert!(can_attend_meetings(&ivs(&[(7, 10), (2, 4)])));
    assert_eq!(min_meeting_rooms(&ivs(&[(0, 30), (5, 10), (15, 20)])), 2);
    assert_eq!(min_meeting_rooms(&ivs(&[(7, 10), (2, 4)])), 1);
    assert_eq!(min_meeting_rooms(&ivs(&[(1, 5), (5, 10), (10, 15)])), 1);
    assert_eq!(min_meeting_rooms(&[]), 0);
}

#[test]
fn interval_conversions() {
    assert_eq!(Interval::from([2, 9]), Interval::new(2, 9));
    assert_eq!(Interval::from((2, 9)), Interval { start: 2, end: 9 });
}
