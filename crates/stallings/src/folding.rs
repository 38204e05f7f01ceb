//! Folding steps and path lifting through them.
//!
//! A step identifies the two edges `v <-(label)- u -(label)-> w`:
//! - `v == w`: one copy of the parallel pair `u <-> w` is deleted, size unchanged.
//! - `v != w`: after normalizing `v < w`, `w` is merged into `v` and every
//!   vertex above `w` moves down by one. One copy of `u -> w` and one copy of
//!   `w -> u` disappear with it.
//!
//! Each [`Folding`] keeps the full graph from *before* the step, which is what
//! [`Folding::raise_path`] needs to map a walk back across the step.

use crate::graph::{Edge, Graph, Label, Path, RepeatedEdge, Vertex};

/// One applied folding step plus the graph it was applied to.
#[derive(Clone, Debug)]
pub struct Folding {
    /// Graph before the step.
    pub graph: Graph,
    pub u: Vertex,
    pub v: Vertex,
    pub w: Vertex,
    pub label: Label,
}

impl Folding {
    /// Locate the next step for `graph`, if any.
    #[inline]
    pub fn find(graph: &Graph) -> Option<RepeatedEdge> {
        graph.find_repeated_edge()
    }

    /// Apply `step` to `graph`. Returns the folded graph and the record of the
    /// step, which takes ownership of the old graph.
    pub fn apply(graph: Graph, step: RepeatedEdge) -> (Graph, Folding) {
        let RepeatedEdge { u, mut v, mut w, label } = step;
        if v > w {
            std::mem::swap(&mut v, &mut w);
        }
        let merging = v != w;
        let renumber = |x: Vertex| -> Vertex {
            if !merging {
                x
            } else if x == w {
                v
            } else if x > w {
                x - 1
            } else {
                x
            }
        };
        let n = if merging { graph.size() - 1 } else { graph.size() };
        let mut next = Graph::new(n);
        let (mut skipped, mut skipped_rev) = (false, false);
        for i in 0..graph.size() {
            for e in graph.edges(i) {
                if !skipped && i == u && e.target == w && e.label == label {
                    skipped = true;
                    continue;
                }
                if !skipped_rev && i == w && e.target == u && e.label == -label {
                    skipped_rev = true;
                    continue;
                }
                next.add_single_edge(renumber(i), renumber(e.target), e.label);
            }
        }
        assert!(
            skipped && skipped_rev,
            "folding ({u},{v},{w},{label}) must drop exactly one edge pair"
        );
        tracing::trace!(u, v, w, label, size = n, "fold step");
        let folding = Folding {
            graph,
            u,
            v,
            w,
            label,
        };
        (next, folding)
    }

    /// Lift `path` (a root walk in the post-fold graph) to the pre-fold graph.
    ///
    /// Missing edges on the merged side are reached through a free detour
    /// `-label, label` via `u`; detours that end up backtracking are cancelled
    /// at the end, so the result is a reduced walk.
    pub fn raise_path(&self, path: &[Edge]) -> Path {
        let g = &self.graph;
        let (v, w) = (self.v, self.w);
        let mut raised: Path = Vec::with_capacity(path.len() + 2);
        let mut pos: Vertex = 0;
        for e in path {
            let mut next = e.target;
            if v != w && next >= w {
                next += 1;
            }
            if next == v || next == w {
                if !g.has_exact_edge(pos, e.label, v) && !g.has_exact_edge(pos, e.label, w) {
                    pos = self.detour(pos, &mut raised);
                }
                pos = if g.has_exact_edge(pos, e.label, v) {
                    v
                } else {
                    assert!(
                        g.has_exact_edge(pos, e.label, w),
                        "no lift for edge {e} from {pos}"
                    );
                    w
                };
                raised.push(Edge::new(pos, e.label));
            } else {
                if !g.has_exact_edge(pos, e.label, next) {
                    pos = self.detour(pos, &mut raised);
                }
                assert!(
                    g.has_exact_edge(pos, e.label, next),
                    "no lift for edge {e} from {pos}"
                );
                raised.push(Edge::new(next, e.label));
                pos = next;
            }
        }
        if pos != 0 {
            assert!(pos == w && v == 0, "lifted walk ends at {pos}, not the root");
            self.detour(pos, &mut raised);
        }
        cancel_backtracks(raised)
    }

    /// Cross from one merged side to the other through `u`.
    fn detour(&self, pos: Vertex, raised: &mut Path) -> Vertex {
        let dest = if pos == self.w {
            self.v
        } else {
            assert_eq!(pos, self.v, "detour must start on a merged side");
            self.w
        };
        raised.push(Edge::new(self.u, -self.label));
        raised.push(Edge::new(dest, self.label));
        dest
    }
}

/// Drop adjacent pairs `(x -> y, l)(y -> x, -l)` until none remain.
fn cancel_backtracks(path: Path) -> Path {
    // Each stack entry remembers the vertex the edge started from.
    let mut stack: Vec<(Vertex, Edge)> = Vec::with_capacity(path.len());
    for e in path {
        let from = stack.last().map_or(0, |(_, top)| top.target);
        match stack.last() {
            Some(&(start, top)) if e.target == start && e.label == -top.label => {
                stack.pop();
            }
            _ => stack.push((from, e)),
        }
    }
    stack.into_iter().map(|(_, e)| e).collect()
}

/// Fold `graph` to completion; returns the folded graph and the history.
pub fn fold(mut graph: Graph) -> (Graph, Vec<Folding>) {
    let mut history = Vec::new();
    while let Some(step) = Folding::find(&graph) {
        let (next, folding) = Folding::apply(graph, step);
        history.push(folding);
        graph = next;
    }
    (graph, history)
}
