//! Subgroup algebra: intersection, fringe, equality and inclusion.

use super::{FringeCfg, Subgroup};
use crate::error::StallingsError;
use crate::graph::{Graph, Vertex};

impl Subgroup {
    /// `H ∩ K` from the pullback of the two Stallings graphs.
    ///
    /// Dangling trees are trimmed and only the root's component is kept; the
    /// result is rebuilt through [`Subgroup::from_graph`], so it carries its own
    /// base and folding history.
    pub fn intersection(h: &Subgroup, k: &Subgroup) -> Subgroup {
        debug_assert!(h.graph.is_folded() && k.graph.is_folded());
        let product = Graph::pullback(&h.graph, &k.graph);
        let core = root_core(&product);
        tracing::debug!(
            pullback_vertices = product.size(),
            core_vertices = core.size(),
            "intersection core"
        );
        Subgroup::from_graph(&core)
    }

    /// All distinct subgroups whose Stallings graph is a quotient of this one
    /// by a vertex partition (including the trivial partition).
    ///
    /// Exponential in the vertex count; refused above `cfg.max_vertices`.
    pub fn fringe(&self, cfg: FringeCfg) -> Result<Vec<Subgroup>, StallingsError> {
        let n = self.graph.size();
        if n > cfg.max_vertices {
            return Err(StallingsError::FringeTooLarge {
                vertices: n,
                limit: cfg.max_vertices,
            });
        }
        let mut found: Vec<Subgroup> = Vec::new();
        let mut classes = vec![0usize; n];
        let mut partitions = 0usize;
        self.walk_partitions(1, 0, &mut classes, &mut partitions, &mut found);
        tracing::debug!(vertices = n, partitions, distinct = found.len(), "fringe");
        Ok(found)
    }

    /// Restricted growth strings: `classes[idx]` ranges over the classes in use
    /// so far plus one fresh class. Vertex 0 is fixed in class 0.
    fn walk_partitions(
        &self,
        idx: usize,
        used: usize,
        classes: &mut [usize],
        partitions: &mut usize,
        found: &mut Vec<Subgroup>,
    ) {
        if idx == classes.len() {
            *partitions += 1;
            let candidate = Subgroup::from_graph(&self.graph.quotient(classes));
            if !found.iter().any(|s| s.equals(&candidate)) {
                found.push(candidate);
            }
            return;
        }
        for c in 0..=used + 1 {
            classes[idx] = c;
            self.walk_partitions(idx + 1, used.max(c), classes, partitions, found);
        }
    }

    /// Same subgroup: rooted isomorphism of the Stallings graphs.
    pub fn equals(&self, other: &Subgroup) -> bool {
        self.graph.is_isomorphic(&other.graph)
    }

    /// Every base element of `self` is accepted by `other`.
    pub fn is_subgroup_of(&self, other: &Subgroup) -> bool {
        self.base.iter().all(|e| other.contains(e))
    }

    /// Partial free-factor check: inclusion and `rank(self) <= rank(other)`.
    ///
    /// These are necessary conditions only; a `true` answer does not prove
    /// that `self` is a free factor of `other`.
    pub fn is_free_factor_of(&self, other: &Subgroup) -> bool {
        self.is_subgroup_of(other) && self.rank() <= other.rank()
    }
}

/// Trim degree-1 chains (never the root), keep the root's component and
/// renumber densely in index order.
fn root_core(graph: &Graph) -> Graph {
    let n = graph.size();
    if n == 0 {
        return Graph::new(1);
    }
    let mut degree: Vec<usize> = (0..n).map(|v| graph.degree(v)).collect();
    let mut alive = vec![true; n];
    for start in 1..n {
        let mut v = start;
        while v != 0 && alive[v] && degree[v] <= 1 {
            alive[v] = false;
            degree[v] = 0;
            let Some(next) = graph
                .edges(v)
                .iter()
                .map(|e| e.target)
                .find(|&t| alive[t])
            else {
                break;
            };
            degree[next] -= 1;
            v = next;
        }
    }

    // Root component among surviving vertices.
    let mut reached = vec![false; n];
    let mut stack: Vec<Vertex> = vec![0];
    reached[0] = true;
    while let Some(u) = stack.pop() {
        for e in graph.edges(u) {
            if alive[e.target] && !reached[e.target] {
                reached[e.target] = true;
                stack.push(e.target);
            }
        }
    }
    let discarded = (0..n).filter(|&v| alive[v] && !reached[v]).count();
    if discarded > 0 {
        tracing::debug!(discarded, "pullback components away from the root dropped");
    }

    let mut new_id = vec![usize::MAX; n];
    let mut next_id = 0;
    for v in 0..n {
        if reached[v] {
            new_id[v] = next_id;
            next_id += 1;
        }
    }
    let mut core = Graph::new(next_id);
    for u in (0..n).filter(|&u| reached[u]) {
        for e in graph.edges(u) {
            if e.label > 0 && reached[e.target] {
                core.add_edge(new_id[u], new_id[e.target], e.label);
            }
        }
    }
    core
}
