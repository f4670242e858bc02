//! Adjacency list graph representation.
//!
//! Variables:
//!   V       = number of vertices
//!   E       = number of directed edges
//!   adj[u]  = ArrayList<usize> of out-neighbours of vertex u
//!
//! Equations:
//!   add_edge(u, v):  u, v < V  =>  adj[u].push(v),  E += 1
//!                    else         VertexOutOfRange
//!   out_degree(u)  = |adj[u]|
//!   in_degree(v)   = |{ u | v in adj[u] }|   (O(V+E) to compute)
//!   add_undirected(u,v): add_edge(u,v) + add_edge(v,u),  E += 2

use log::debug;

use crate::data_structures::ArrayList;
use crate::error::GraphError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjList {
    adj: Vec<ArrayList<usize>>,
}

impl AdjList {
    /// Create an empty graph with `v` vertices and no edges.
    pub fn new(v: usize) -> Self {
        Self {
            adj: (0..v).map(|_| ArrayList::new()).collect(),
        }
    }

    /// Build a directed graph from `(from, to)` pairs.
    pub fn from_edges(v: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut graph = Self::new(v);
        for &(u, w) in edges {
            graph.add_edge(u, w)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Append a fresh vertex and return its id.
    pub fn add_vertex(&mut self) -> usize {
        self.adj.push(ArrayList::new());
        self.adj.len() - 1
    }

    /// Add a directed edge u -> v.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        check_edge(u, v, self.adj.len())?;
        self.adj[u].push(v);
        Ok(())
    }

    /// Add undirected edge (both directions).
    pub fn add_undirected(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        check_edge(u, v, self.adj.len())?;
        self.adj[u].push(v);
        self.adj[v].push(u);
        Ok(())
    }

    /// Out-neighbours of `u` in insertion order; empty for unknown vertices.
    pub fn neighbours(&self, u: usize) -> &[usize] {
        self.adj.get(u).map(ArrayList::as_slice).unwrap_or(&[])
    }

    pub fn in_degrees(&self) -> Vec<usize> {
        let mut indegree = vec![0; self.adj.len()];
        for edges in &self.adj {
            for &v in edges {
                indegree[v] += 1;
            }
        }
        indegree
    }
}

pub(crate) fn check_edge(from: usize, to: usize, vertices: usize) -> Result<(), GraphError> {
    if from < vertices && to < vertices {
        return Ok(());
    }
    debug!("rejecting edge ({from}, {to}) for graph with {vertices} vertices");
    Err(GraphError::VertexOutOfRange { from, to, vertices })
}
