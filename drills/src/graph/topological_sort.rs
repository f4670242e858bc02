//! Kahn's algorithm over an [`AdjList`], queue-driven.
//!
//! Equations:
//!   ready   = { v | in_degree(v) = 0 }
//!   pop u:  order.push(u);  for v in adj[u]: in_degree(v) -= 1, ready if 0
//!   acyclic iff |order| == V

use crate::data_structures::Queue;
use crate::error::GraphError;

use super::adj_list::AdjList;

/// A topological order of `graph`, or `None` if it has a cycle.
pub fn topological_order(graph: &AdjList) -> Option<Vec<usize>> {
    let mut indegree = graph.in_degrees();

    let mut queue = Queue::new();
    for (v, &d) in indegree.iter().enumerate() {
        if d == 0 {
            queue.enqueue(v);
        }
    }

    let mut order = Vec::with_capacity(graph.vertex_count());
    while let Some(u) = queue.dequeue() {
        order.push(u);
        for &v in graph.neighbours(u) {
            indegree[v] -= 1;
            if indegree[v] == 0 {
                queue.enqueue(v);
            }
        }
    }
    (order.len() == graph.vertex_count()).then_some(order)
}

/// Whether every course can be taken, given `(course, prerequisite)` pairs.
pub fn can_finish(num_courses: usize, prerequisites: &[(usize, usize)]) -> Result<bool, GraphError> {
    let mut graph = AdjList::new(num_courses);
    for &(course, before) in prerequisites {
        graph.add_edge(before, course)?;
    }
    Ok(topological_order(&graph).is_some())
}
