//! Edge and graph types plus the basic mutation/lookup surface.

use std::collections::HashMap;
use std::fmt;

use crate::element::{fmt_symbol, Symbol};

pub type Vertex = usize;
pub type Label = Symbol;

/// Outgoing half of an edge: where it goes and with which label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub target: Vertex,
    pub label: Label,
}

impl Edge {
    #[inline]
    pub fn new(target: Vertex, label: Label) -> Self {
        Self { target, label }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},", self.target)?;
        fmt_symbol(f, self.label)?;
        write!(f, ")")
    }
}

/// Walk starting at the root; each step records the vertex it arrives at.
pub type Path = Vec<Edge>;

/// Two edges leaving `u` with the same `label`, towards `v` and `w`.
///
/// `v` is the target of the later duplicate in adjacency order, `w` the target
/// of the first edge carrying `label`. They may coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatedEdge {
    pub u: Vertex,
    pub v: Vertex,
    pub w: Vertex,
    pub label: Label,
}

/// Labeled multigraph. See the module docs for conventions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
    max_label: Label,
}

impl Graph {
    /// Graph with `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            max_label: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.adj.len()
    }

    /// Largest label magnitude ever inserted (rank hint).
    #[inline]
    pub fn max_label(&self) -> Label {
        self.max_label
    }

    /// Append an isolated vertex and return its id.
    pub fn add_vertex(&mut self) -> Vertex {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// Grow or shrink to `n` vertices. Shrinking drops edges into removed vertices.
    pub fn resize(&mut self, n: usize) {
        self.adj.resize_with(n, Vec::new);
        for out in &mut self.adj {
            out.retain(|e| e.target < n);
        }
    }

    /// Insert `(u → v, label)` and its inverse `(v → u, -label)`.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, label: Label) {
        self.add_single_edge(u, v, label);
        self.add_single_edge(v, u, -label);
    }

    /// Insert only `(u → v, label)`.
    pub fn add_single_edge(&mut self, u: Vertex, v: Vertex, label: Label) {
        assert!(
            label != 0 && label != Label::MIN,
            "edge labels must be non-zero and invertible"
        );
        assert!(
            u < self.size() && v < self.size(),
            "edge {u}->{v} out of range (size {})",
            self.size()
        );
        self.adj[u].push(Edge::new(v, label));
        self.max_label = self.max_label.max(label.abs());
    }

    #[inline]
    pub fn edges(&self, u: Vertex) -> &[Edge] {
        &self.adj[u]
    }

    #[inline]
    pub fn degree(&self, u: Vertex) -> usize {
        self.adj[u].len()
    }

    /// Number of undirected edges (each stored pair counts once).
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// First repeated edge in scan order (vertex index, then adjacency order).
    pub fn find_repeated_edge(&self) -> Option<RepeatedEdge> {
        for (u, out) in self.adj.iter().enumerate() {
            let mut seen: HashMap<Label, Vertex> = HashMap::with_capacity(out.len());
            for e in out {
                if let Some(&w) = seen.get(&e.label) {
                    return Some(RepeatedEdge {
                        u,
                        v: e.target,
                        w,
                        label: e.label,
                    });
                }
                seen.insert(e.label, e.target);
            }
        }
        None
    }

    /// True when no vertex has two outgoing edges with the same label.
    pub fn is_folded(&self) -> bool {
        self.find_repeated_edge().is_none()
    }

    /// Target of the first edge out of `u` labeled `label`.
    pub fn has_edge(&self, u: Vertex, label: Label) -> Option<Vertex> {
        self.adj[u]
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.target)
    }

    pub fn has_exact_edge(&self, u: Vertex, label: Label, v: Vertex) -> bool {
        self.adj[u].contains(&Edge::new(v, label))
    }

    /// Follow `word` from `start`; `None` as soon as a label is missing.
    pub fn walk(&self, start: Vertex, word: &[Label]) -> Option<Vertex> {
        word.iter()
            .try_fold(start, |node, &label| self.has_edge(node, label))
    }
}

impl fmt::Display for Graph {
    /// Vertex count, then one line of `(target,label)` pairs per vertex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size())?;
        for out in &self.adj {
            let mut first = true;
            for e in out {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                write!(f, "{e}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
