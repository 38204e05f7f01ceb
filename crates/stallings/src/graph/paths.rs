//! BFS shortest paths and a union-find spanning forest.

use std::collections::VecDeque;

use super::types::{Edge, Graph, Label, Vertex};
use crate::element::Element;

/// BFS tree from the root: per vertex the predecessor edge and the distance.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    /// `(predecessor, label)` of the edge used to reach each vertex; `None`
    /// for the root and for unreachable vertices.
    pub pred: Vec<Option<(Vertex, Label)>>,
    /// Distance from the root; `None` if unreachable.
    pub dist: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Shortest word read from the root to `v`, if `v` is reachable.
    pub fn word_to(&self, v: Vertex) -> Option<Element> {
        let d = self.dist[v]?;
        let mut rev = Vec::with_capacity(d);
        let mut cur = v;
        while let Some((p, label)) = self.pred[cur] {
            rev.push(label);
            cur = p;
        }
        rev.reverse();
        Some(Element::new(rev))
    }
}

/// Spanning forest plus the leftover (cycle-closing) edges.
#[derive(Clone, Debug)]
pub struct SpanningTree {
    /// Tree edges as `(source, edge)`, positive labels only.
    pub tree: Vec<(Vertex, Edge)>,
    /// Non-tree edges as `(source, edge)`; each closes one independent cycle.
    pub cycles: Vec<(Vertex, Edge)>,
    words: Vec<Option<Element>>,
}

impl SpanningTree {
    /// Word along tree edges from the root to `v` (`None` outside the root's tree).
    pub fn word_to(&self, v: Vertex) -> Option<&Element> {
        self.words[v].as_ref()
    }

    /// Reduced loop at the root closed by the non-tree edge `(u, e)`:
    /// `word(u) · label · word(target)⁻¹`.
    pub fn cycle_word(&self, u: Vertex, e: Edge) -> Option<Element> {
        let to_u = self.word_to(u)?;
        let to_v = self.word_to(e.target)?;
        let step = Element::new(vec![e.label]);
        Some(to_u.product(&step).product(&to_v.inverse()))
    }
}

/// Minimal union-find with path halving.
struct Dsu {
    parent: Vec<usize>,
}

impl Dsu {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        // Keep the smaller id as representative so the root's class stays 0.
        let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent[hi] = lo;
        true
    }
}

impl Graph {
    /// BFS from vertex 0 over the stored adjacency (both directions are stored,
    /// so this is BFS on the underlying undirected graph).
    pub fn all_shortest_paths(&self) -> ShortestPaths {
        let n = self.size();
        let mut pred = vec![None; n];
        let mut dist = vec![None; n];
        if n == 0 {
            return ShortestPaths { pred, dist };
        }
        let mut queue = VecDeque::new();
        dist[0] = Some(0);
        queue.push_back(0);
        while let Some(u) = queue.pop_front() {
            let du = dist[u].unwrap_or(0);
            for e in self.edges(u) {
                if dist[e.target].is_none() {
                    dist[e.target] = Some(du + 1);
                    pred[e.target] = Some((u, e.label));
                    queue.push_back(e.target);
                }
            }
        }
        ShortestPaths { pred, dist }
    }

    /// Spanning forest over positive-label edges in vertex/adjacency order.
    pub fn spanning_tree(&self) -> SpanningTree {
        let n = self.size();
        let mut dsu = Dsu::new(n);
        let mut tree = Vec::new();
        let mut cycles = Vec::new();
        let mut tree_adj: Vec<Vec<Edge>> = vec![Vec::new(); n];
        for u in 0..n {
            for &e in self.edges(u) {
                if e.label < 0 {
                    continue;
                }
                if dsu.union(u, e.target) {
                    tree.push((u, e));
                    tree_adj[u].push(e);
                    tree_adj[e.target].push(Edge::new(u, -e.label));
                } else {
                    cycles.push((u, e));
                }
            }
        }
        let words = tree_words(&tree_adj);
        SpanningTree {
            tree,
            cycles,
            words,
        }
    }
}

/// Root-to-vertex words along the tree adjacency (BFS from 0).
fn tree_words(tree_adj: &[Vec<Edge>]) -> Vec<Option<Element>> {
    let n = tree_adj.len();
    let mut words: Vec<Option<Element>> = vec![None; n];
    if n == 0 {
        return words;
    }
    words[0] = Some(Element::empty());
    let mut queue = VecDeque::from([0usize]);
    while let Some(u) = queue.pop_front() {
        let base = words[u].clone().unwrap_or_default();
        for e in &tree_adj[u] {
            if words[e.target].is_none() {
                let mut factors = base.factors().to_vec();
                factors.push(e.label);
                words[e.target] = Some(Element::new(factors));
                queue.push_back(e.target);
            }
        }
    }
    words
}
