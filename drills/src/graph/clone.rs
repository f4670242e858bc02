//! Deep copy of a value-carrying graph.
//!
//! Nodes live in an arena and refer to each other by index, so cyclic
//! neighbour relations need no shared ownership.

use crate::data_structures::Stack;
use crate::error::GraphError;

use super::adj_list::AdjList;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueGraph {
    vals: Vec<i32>,
    adj: AdjList,
}

impl ValueGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, val: i32) -> usize {
        self.vals.push(val);
        self.adj.add_vertex()
    }

    /// Link `a` and `b` in both directions.
    pub fn connect(&mut self, a: usize, b: usize) -> Result<(), GraphError> {
        self.adj.add_undirected(a, b)
    }

    pub fn value(&self, node: usize) -> Option<i32> {
        self.vals.get(node).copied()
    }

    pub fn neighbours(&self, node: usize) -> &[usize] {
        self.adj.neighbours(node)
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }
}

/// Copy the component reachable from `start`.
///
/// Nodes are renumbered in discovery order, `start` becoming node 0, and
/// every neighbour list keeps its original order. `None` if `start` is not a
/// node of `graph`.
pub fn clone_graph(graph: &ValueGraph, start: usize) -> Option<ValueGraph> {
    let mut copy = ValueGraph::new();
    let mut mapped: Vec<Option<usize>> = vec![None; graph.len()];
    let mut stack = Stack::new();

    *mapped.get_mut(start)? = Some(copy.add_node(graph.value(start)?));
    stack.push(start);

    while let Some(old) = stack.pop() {
        let new = mapped[old]?;
        for &nb in graph.neighbours(old) {
            let nb_new = match mapped[nb] {
                Some(id) => id,
                None => {
                    let id = copy.add_node(graph.value(nb)?);
                    mapped[nb] = Some(id);
                    stack.push(nb);
                    id
                }
            };
            copy.adj.add_edge(new, nb_new).ok()?;
        }
    }
    Some(copy)
}
