use drills::lists::{
    from_slice, has_cycle, len, merge_k, merge_two, remove_nth_from_end, reorder, reverse, to_vec, List,
};

#[test]
fn reverse_relinks_all_nodes() {
    assert_eq!(to_vec(&reverse(from_slice(&[1, 2, 3, 4, 5]))), vec![5, 4, 3, 2, 1]);
    assert_eq!(reverse(None), None);
}

#[test]
fn merge_two_is_stable_on_ties() {
    let merged = merge_two(from_slice(&[1, 2, 4]), from_slice(&[1, 3, 4]));
    assert_eq!(to_vec(&merged), vec![1, 1, 2, 3, 4, 4]);
    assert_eq!(to_vec(&merge_two(None, from_slice(&[0]))), vec![0]);
    assert_eq!(merge_two(None, None), None);
}

#[test]
fn merge_k_drains_every_list() {
    let lists = vec![from_slice(&[1, 4, 5]), from_slice(&[1, 3, 4]), None, from_slice(&[2, 6])];
    assert_eq!(to_vec(&merge_k(lists)), vec![1, 1, 2, 3, 4, 4, 5, 6]);
    assert_eq!(merge_k(Vec::new()), None);
}

#[test]
fn remove_from_end() {
    assert_eq!(to_vec(&remove_nth_from_end(from_slice(&[1, 2, 3, 4, 5]), 2)), vec![1, 2, 3, 5]);
    assert_eq!(to_vec(&remove_nth_from_end(from_slice(&[1, 2]), 2)), vec![2]);
    assert_eq!(remove_nth_from_end(from_slice(&[1]), 1), None);
    assert_eq!(to_vec(&remove_nth_from_end(from_slice(&[1, 2]), 3)), vec![1, 2]);
    assert_eq!(to_vec(&remove_nth_from_end(from_slice(&[1, 2]), 0)), vec![1, 2]);
}

#[test]
fn reorder_interleaves_from_both_ends() {
    let mut list = from_slice(&[1, 2, 3, 4]);
    reorder(&mut list);
    assert_eq!(to_vec(&list), vec![1, 4, 2, 3]);

    let mut list = from_slice(&[1, 2, 3, 4, 5]);
    reorder(&mut list);
    assert_eq!(to_vec(&list), vec![1, 5, 2, 4, 3]);

    let mut list: List = from_slice(&[7, 8]);
    reorder(&mut list);
    assert_eq!(to_vec(&list), vec![7, 8]);
}

#[test]
fn cycle_detection_over_successor_table() {
    // 0 -> 1 -> 2 -> 3 -> 1
    assert!(has_cycle(&[Some(1), Some(2), Some(3), Some(1)], Some(0)));
    assert!(has_cycle(&[Some(0)], Some(0)));
    assert!(!has_cycle(&[Some(1), Some(2), None], Some(0)));
    assert!(!has_cycle(&[Some(1), None], None));
    assert!(!has_cycle(&[None], Some(0)));
}

#[test]
fn long_results_drop_without_recursion() {
    let vals: Vec<i32> = (0..1_000_000).collect();
    let reversed = reverse(from_slice(&vals));
    assert_eq!(len(&reversed), 1_000_000);
    drop(reversed);

    let evens: Vec<i32> = (0..300_000).map(|v| v * 2).collect();
    let odds: Vec<i32> = (0..300_000).map(|v| v * 2 + 1).collect();
    let merged = merge_two(from_slice(&evens), from_slice(&odds));
    assert_eq!(len(&merged), 600_000);
    drop(merged);
}
