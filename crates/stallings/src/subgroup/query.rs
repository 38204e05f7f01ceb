//! Membership, base coordinates, index and cosets.

use super::Subgroup;
use crate::element::{Element, Symbol};
use crate::error::StallingsError;
use crate::graph::{Edge, Path, Vertex};

/// Index of a subgroup in the free group of a given rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Index {
    Finite(usize),
    Infinite,
}

impl Index {
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Index::Finite(_))
    }

    #[inline]
    pub fn value(self) -> Option<usize> {
        match self {
            Index::Finite(n) => Some(n),
            Index::Infinite => None,
        }
    }
}

impl Subgroup {
    /// True iff reading `element` from the root stays inside the graph and
    /// ends at the root.
    pub fn contains(&self, element: &Element) -> bool {
        self.graph.walk(0, element.factors()) == Some(0)
    }

    /// The accepting walk for `element`, or `None` for non-members.
    pub fn path(&self, element: &Element) -> Option<Path> {
        let mut node: Vertex = 0;
        let mut path = Vec::with_capacity(element.len());
        for &label in element.factors() {
            node = self.graph.has_edge(node, label)?;
            path.push(Edge::new(node, label));
        }
        (node == 0).then_some(path)
    }

    /// Express a member as signed base indices.
    ///
    /// The product of `base_element(c)` over the result, in order, freely
    /// reduces to `element.reduce()`.
    pub fn coordinates(&self, element: &Element) -> Result<Vec<Symbol>, StallingsError> {
        let mut path = self.path(element).ok_or(StallingsError::NotAMember)?;
        for folding in self.foldings.iter().rev() {
            path = folding.raise_path(&path);
        }
        let petals = self.petal_graph();
        let root_edges = petals.edges(0);
        let mut coords = Vec::new();
        let mut pos: Vertex = 0;
        for e in &path {
            if pos == 0 {
                let slot = root_edges
                    .iter()
                    .position(|r| r == e)
                    .unwrap_or_else(|| panic!("lifted walk leaves the root by missing edge {e}"));
                coords.push(self.coordinates[slot]);
            }
            pos = e.target;
        }
        debug_assert_eq!(pos, 0);
        Ok(coords)
    }

    /// Finite iff every vertex carries all `2·rank` labels (complete automaton);
    /// the index is then the number of vertices.
    pub fn index(&self, rank: usize) -> Index {
        debug_assert!(self.graph.is_folded());
        let full = 2 * rank;
        let complete = (0..self.graph.size()).all(|v| self.graph.degree(v) == full);
        if complete {
            Index::Finite(self.graph.size())
        } else {
            Index::Infinite
        }
    }

    /// [`Subgroup::index`] with the rank taken from the largest label in the graph.
    pub fn index_auto(&self) -> Index {
        self.index(self.graph.max_label() as usize)
    }

    /// One shortest representative per coset, indexed by the vertex it reaches.
    pub fn cosets(&self, rank: usize) -> Result<Vec<Element>, StallingsError> {
        if !self.index(rank).is_finite() {
            return Err(StallingsError::InfiniteIndex { rank });
        }
        let sp = self.graph.all_shortest_paths();
        Ok((0..self.graph.size())
            .map(|v| {
                sp.word_to(v)
                    .unwrap_or_else(|| panic!("vertex {v} unreachable in a complete automaton"))
            })
            .collect())
    }

    /// Coset id (vertex reached from the root) of `element`, if every label is present.
    pub fn coset_of(&self, element: &Element) -> Option<usize> {
        self.graph.walk(0, element.factors())
    }
}
