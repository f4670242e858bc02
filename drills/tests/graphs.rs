use drills::error::GraphError;
use drills::graph::{
    alien_order, can_finish, clone_graph, count_components, num_islands, pacific_atlantic, topological_order, valid_tree,
    AdjList, UnionFind, ValueGraph,
};

fn grid(rows: &[&str]) -> Vec<Vec<char>> {
    rows.iter().map(|r| r.chars().collect()).collect()
}

#[test]
fn topological_order_respects_every_edge() {
    let edges = [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)];
    let graph = AdjList::from_edges(6, &edges).unwrap();
    let order = topological_order(&graph).expect("acyclic");
    let pos = |v: usize| order.iter().position(|&x| x == v).unwrap();
    for (u, v) in edges {
        assert!(pos(u) < pos(v), "{u} must precede {v} in {order:?}");
    }
}

#[test]
fn course_schedule() {
    assert_eq!(can_finish(2, &[(1, 0)]), Ok(true));
    assert_eq!(can_finish(2, &[(1, 0), (0, 1)]), Ok(false));
    assert_eq!(can_finish(0, &[]), Ok(true));
    assert_eq!(
        can_finish(2, &[(2, 0)]),
        Err(GraphError::VertexOutOfRange { from: 0, to: 2, vertices: 2 })
    );
}

#[test]
fn alien_dictionary() {
    assert_eq!(alien_order(&["wrt", "wrf", "er", "ett", "rftt"]).as_deref(), Some("wertf"));
    assert_eq!(alien_order(&["z", "x"]).as_deref(), Some("zx"));
    assert_eq!(alien_order(&["z", "x", "z"]), None);
    assert_eq!(alien_order(&["abc", "ab"]), None);
    assert_eq!(alien_order(&["ab", "abc"]).as_deref(), Some("abc"));
}

#[test]
fn union_find_tracks_sets() {
    let mut uf = UnionFind::new(5);
    assert_eq!(uf.sets(), 5);
    assert!(uf.union(0, 1));
    assert!(uf.union(3, 4));
    assert!(!uf.union(1, 0));
    assert_eq!(uf.find(1), uf.find(0));
    assert_ne!(uf.find(0), uf.find(3));
    assert_eq!(uf.sets(), 3);
    assert_eq!(uf.len(), 5);
}

#[test]
fn tree_and_component_counts() {
    assert_eq!(valid_tree(5, &[(0, 1), (0, 2), (0, 3), (1, 4)]), Ok(true));
    assert_eq!(valid_tree(5, &[(0, 1), (1, 2), (2, 3), (1, 3), (1, 4)]), Ok(false));
    assert_eq!(valid_tree(4, &[(0, 1), (2, 3), (1, 0)]), Ok(false));
    assert_eq!(valid_tree(1, &[]), Ok(true));
    assert_eq!(valid_tree(0, &[]), Ok(false));
    assert_eq!(count_components(5, &[(0, 1), (1, 2), (3, 4)]), Ok(2));
    assert_eq!(count_components(3, &[]), Ok(3));
    assert!(count_components(2, &[(0, 5)]).is_err());
}

#[test]
fn islands_are_four_connected() {
    let map = grid(&["11000", "11000", "00100", "00011"]);
    assert_eq!(num_islands(&map), 3);
    assert_eq!(num_islands(&grid(&["101", "010", "101"])), 5);
    assert_eq!(num_islands(&[]), 0);
}

#[test]
fn water_reaching_both_oceans() {
    let heights = vec![
        vec![1, 2, 2, 3, 5],
        vec![3, 2, 3, 4, 4],
        vec![2, 4, 5, 3, 1],
        vec![6, 7, 1, 4, 5],
        vec![5, 1, 1, 2, 4],
    ];
    assert_eq!(
        pacific_atlantic(&heights).unwrap(),
        vec![(0, 4), (1, 3), (1, 4), (2, 2), (3, 0), (3, 1), (4, 0)]
    );
    assert_eq!(pacific_atlantic(&[vec![7]]).unwrap(), vec![(0, 0)]);
    assert!(pacific_atlantic(&[vec![1, 2], vec![3]]).is_err());
}

#[test]
fn cloned_graph_is_isomorphic_and_independent() {
    let mut g = ValueGraph::new();
    let ids: Vec<usize> = (1..=4).map(|v| g.add_node(v)).collect();
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
        g.connect(ids[a], ids[b]).unwrap();
    }
    let extra = g.add_node(99);

    let copy = clone_graph(&g, ids[0]).expect("start exists");
    assert_eq!(copy.len(), 4, "unreachable node {extra} must not be copied");
    assert_eq!(copy.value(0), Some(1));
    for node in 0..copy.len() {
        let degree = copy.neighbours(node).len();
        assert_eq!(degree, 2, "node {node} in a 4-cycle has two neighbours");
        for &nb in copy.neighbours(node) {
            assert!(copy.neighbours(nb).contains(&node));
        }
    }
    assert!(clone_graph(&g, 42).is_none());
}
