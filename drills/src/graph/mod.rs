pub mod adj_list;
pub mod alien_order;
pub mod clone;
pub mod grid;
pub mod topological_sort;
pub mod union_find;

pub use adj_list::AdjList;
pub use alien_order::alien_order;
pub use clone::{clone_graph, ValueGraph};
pub use grid::{num_islands, pacific_atlantic};
pub use topological_sort::{can_finish, topological_order};
pub use union_find::{count_components, valid_tree, UnionFind};
