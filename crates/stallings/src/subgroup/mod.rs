//! Finitely generated subgroups of a free group via their Stallings graph.
//!
//! Purpose
//! - Own a base, the full folding history, and the folded automaton (root 0).
//! - Answer membership, rewriting in base coordinates, index and cosets.
//! - Derive new subgroups: intersections (pullback + trim) and the fringe
//!   (quotients by vertex partitions).
//!
//! Lifecycle
//! - Built once, either from a base ([`Subgroup::from_base`]) or from any rooted
//!   graph ([`Subgroup::from_graph`], which synthesizes a base from the
//!   fundamental cycles of a spanning tree). Folding runs to completion inside
//!   the constructor; a `Subgroup` is immutable afterwards.
//!
//! Split
//! - `build.rs` (construction and folding), `query.rs` (membership, coordinates,
//!   index, cosets), `algebra.rs` (intersection, fringe, comparisons).

mod algebra;
mod build;
mod query;

use crate::element::{Element, Symbol};
use crate::folding::Folding;
use crate::graph::Graph;

pub use query::Index;

/// Fringe enumeration bounds.
#[derive(Clone, Copy, Debug)]
pub struct FringeCfg {
    /// Largest Stallings graph (in vertices) whose partitions are enumerated.
    /// Partition count grows like the Bell numbers: 8 vertices is 4140 candidates.
    pub max_vertices: usize,
}

impl Default for FringeCfg {
    fn default() -> Self {
        Self { max_vertices: 8 }
    }
}

/// A subgroup together with its folding history.
#[derive(Clone, Debug)]
pub struct Subgroup {
    base: Vec<Element>,
    foldings: Vec<Folding>,
    graph: Graph,
    /// Signed base index per root edge of the petal graph, in adjacency order.
    coordinates: Vec<Symbol>,
}

impl Subgroup {
    /// Reduced base elements (synthesized for graph-built subgroups).
    pub fn base(&self) -> &[Element] {
        &self.base
    }

    /// Applied foldings, oldest first.
    pub fn foldings(&self) -> &[Folding] {
        &self.foldings
    }

    /// The folded Stallings graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Graph before any folding (the bouquet of petals).
    pub fn petal_graph(&self) -> &Graph {
        self.foldings.first().map_or(&self.graph, |f| &f.graph)
    }

    /// Base element for a signed 1-based coordinate (`-i` gives the inverse).
    pub fn base_element(&self, coordinate: Symbol) -> Element {
        assert!(coordinate != 0, "coordinates are 1-based");
        let e = &self.base[coordinate.unsigned_abs() as usize - 1];
        if coordinate > 0 {
            e.clone()
        } else {
            e.inverse()
        }
    }

    /// Free rank of the subgroup: `edges - vertices + 1` of the Stallings graph.
    pub fn rank(&self) -> usize {
        (self.graph.num_edges() + 1).saturating_sub(self.graph.size())
    }
}

#[cfg(test)]
mod tests;
