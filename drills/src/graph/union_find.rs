//! Disjoint-set forest with path compression and union by size.
//!
//! Variables:
//!   parent[x] : representative link, parent[r] = r for roots
//!   size[r]   : number of members under root r
//!   sets      : number of disjoint sets
//!
//! Equations:
//!   find(x):     follow parent to root r, then point every visited x at r
//!   union(a,b):  find(a) == find(b)  =>  false
//!                else attach smaller root under larger,  sets' = sets - 1

use crate::error::GraphError;

use super::adj_list::check_edge;

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Merge the sets holding `a` and `b`; `false` if already merged.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.sets -= 1;
        true
    }

    pub fn sets(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

/// Whether the undirected `edges` over `n` vertices form a single tree.
///
/// Zero vertices is not a tree.
pub fn valid_tree(n: usize, edges: &[(usize, usize)]) -> Result<bool, GraphError> {
    for &(a, b) in edges {
        check_edge(a, b, n)?;
    }
    if n == 0 || edges.len() != n - 1 {
        return Ok(false);
    }
    let mut uf = UnionFind::new(n);
    Ok(edges.iter().all(|&(a, b)| uf.union(a, b)))
}

/// Number of connected components of the undirected graph.
pub fn count_components(n: usize, edges: &[(usize, usize)]) -> Result<usize, GraphError> {
    let mut uf = UnionFind::new(n);
    for &(a, b) in edges {
        check_edge(a, b, n)?;
        uf.union(a, b);
    }
    Ok(uf.sets())
}
