use drills::dynamic_programming::{climb_stairs, jump_game, rob, rob_circular, unique_paths};
use drills::optimization::combination_sum;

#[test]
fn stairs_follow_fibonacci() {
    assert_eq!(climb_stairs(1), 1);
    assert_eq!(climb_stairs(2), 2);
    assert_eq!(climb_stairs(5), 8);
    assert_eq!(climb_stairs(45), 1_836_311_903);
}

#[test]
fn house_robber_line_and_ring() {
    assert_eq!(rob(&[1, 2, 3, 1]), 4);
    assert_eq!(rob(&[2, 7, 9, 3, 1]), 12);
    assert_eq!(rob(&[]), 0);
    assert_eq!(rob_circular(&[2, 3, 2]), 3);
    assert_eq!(rob_circular(&[1, 2, 3, 1]), 4);
    assert_eq!(rob_circular(&[7]), 7);
}

#[test]
fn reachability_and_paths() {
    assert!(jump_game(&[2, 3, 1, 1, 4]));
    assert!(!jump_game(&[3, 2, 1, 0, 4]));
    assert!(jump_game(&[0]));
    assert_eq!(unique_paths(3, 7), 28);
    assert_eq!(unique_paths(1, 1), 1);
}

#[test]
fn combination_sum_lists_each_multiset_once() {
    assert_eq!(combination_sum(&[2, 3, 6, 7], 7), vec![vec![2, 2, 3], vec![7]]);
    assert_eq!(
        combination_sum(&[2, 3, 5], 8),
        vec![vec![2, 2, 2, 2], vec![2, 3, 3], vec![3, 5]]
    );
    assert!(combination_sum(&[2], 1).is_empty());
    assert_eq!(combination_sum(&[4], 0), vec![Vec::<i32>::new()]);
    assert_eq!(combination_sum(&[0, -1, 3], 3), vec![vec![3]]);
    assert_eq!(combination_sum(&[2, 2], 4), vec![vec![2, 2]]);
    assert_eq!(combination_sum(&[2, 3, 2], 7), vec![vec![2, 2, 3]]);
}
