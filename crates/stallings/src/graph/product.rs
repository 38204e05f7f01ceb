//! Whole-graph constructions: quotient, rooted isomorphism, pullback.

use std::collections::{HashMap, VecDeque};

use super::types::{Graph, Vertex};

impl Graph {
    /// Merge vertices by `classes[v]` (dense class ids, root's class is 0).
    ///
    /// Identical `(target, label)` entries inside a merged class are kept once;
    /// distinct targets under one label survive (the result may be unfolded).
    pub fn quotient(&self, classes: &[usize]) -> Graph {
        assert_eq!(classes.len(), self.size(), "one class per vertex required");
        let n = classes.iter().map(|&c| c + 1).max().unwrap_or(0);
        debug_assert!(self.size() == 0 || classes[0] == 0, "root must map to class 0");
        let mut out = Graph::new(n);
        for u in 0..self.size() {
            let cu = classes[u];
            for e in self.edges(u) {
                let ct = classes[e.target];
                if !out.has_exact_edge(cu, e.label, ct) {
                    out.add_single_edge(cu, ct, e.label);
                }
            }
        }
        out
    }

    /// Rooted isomorphism of two folded graphs.
    ///
    /// BFS from both roots in lockstep; every matched pair must have the same
    /// out-degree and the same label → target correspondence.
    pub fn is_isomorphic(&self, other: &Graph) -> bool {
        debug_assert!(self.is_folded() && other.is_folded());
        if self.size() != other.size() {
            return false;
        }
        if self.size() == 0 {
            return true;
        }
        let n = self.size();
        let mut fwd: Vec<Option<Vertex>> = vec![None; n];
        let mut bwd: Vec<Option<Vertex>> = vec![None; n];
        fwd[0] = Some(0);
        bwd[0] = Some(0);
        let mut queue = VecDeque::from([0usize]);
        while let Some(a) = queue.pop_front() {
            let Some(b) = fwd[a] else {
                return false;
            };
            if self.degree(a) != other.degree(b) {
                return false;
            }
            for e in self.edges(a) {
                let Some(tb) = other.has_edge(b, e.label) else {
                    return false;
                };
                match (fwd[e.target], bwd[tb]) {
                    (None, None) => {
                        fwd[e.target] = Some(tb);
                        bwd[tb] = Some(e.target);
                        queue.push_back(e.target);
                    }
                    (Some(x), Some(y)) if x == tb && y == e.target => {}
                    _ => return false,
                }
            }
        }
        true
    }

    /// Synchronized product of `h` and `k` over shared positive labels.
    ///
    /// Vertex pairs are numbered on first use; `(0, 0)` is always vertex 0.
    pub fn pullback(h: &Graph, k: &Graph) -> Graph {
        let mut ids: HashMap<(Vertex, Vertex), Vertex> = HashMap::new();
        let mut out = Graph::new(0);
        if h.size() > 0 && k.size() > 0 {
            ids.insert((0, 0), out.add_vertex());
        }
        let mut id_of = |out: &mut Graph, pair: (Vertex, Vertex)| -> Vertex {
            *ids.entry(pair).or_insert_with(|| out.add_vertex())
        };
        for u1 in 0..h.size() {
            for e1 in h.edges(u1).iter().filter(|e| e.label > 0) {
                for u2 in 0..k.size() {
                    for e2 in k.edges(u2) {
                        if e2.label != e1.label {
                            continue;
                        }
                        let from = id_of(&mut out, (u1, u2));
                        let to = id_of(&mut out, (e1.target, e2.target));
                        out.add_edge(from, to, e1.label);
                    }
                }
            }
        }
        out
    }
}
