//! Letter order of an alien alphabet from a sorted word list.
//!
//! Each adjacent pair of words contributes at most one precedence edge: the
//! first position where they differ. A word followed by its own proper prefix
//! is a contradiction. Letters with no forced order keep first-appearance order.

use std::collections::HashMap;

use log::debug;

use super::adj_list::AdjList;
use super::topological_sort::topological_order;

pub fn alien_order(words: &[&str]) -> Option<String> {
    let mut letters: Vec<char> = Vec::new();
    let mut index: HashMap<char, usize> = HashMap::new();
    for word in words {
        for ch in word.chars() {
            index.entry(ch).or_insert_with(|| {
                letters.push(ch);
                letters.len() - 1
            });
        }
    }

    let mut graph = AdjList::new(letters.len());
    for pair in words.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        match a.chars().zip(b.chars()).find(|(x, y)| x != y) {
            Some((x, y)) => {
                let (u, v) = (*index.get(&x)?, *index.get(&y)?);
                graph.add_edge(u, v).ok()?;
            }
            None if a.chars().count() > b.chars().count() => {
                debug!("`{a}` sorts before its own prefix `{b}`");
                return None;
            }
            None => {}
        }
    }

    let Some(order) = topological_order(&graph) else {
        debug!("letter precedences form a cycle");
        return None;
    };
    Some(order.into_iter().map(|i| letters[i]).collect())
}
