//! Construction: petal bouquet from a base, or a base from a rooted graph.

use super::Subgroup;
use crate::element::{Element, Symbol};
use crate::folding::fold;
use crate::graph::Graph;

impl Subgroup {
    /// Subgroup generated by `base`. Elements are freely reduced first;
    /// identity elements keep their slot in the base but add no petal.
    pub fn from_base(base: Vec<Element>) -> Self {
        let base: Vec<Element> = base.iter().map(Element::reduce).collect();
        let mut petals = Graph::new(1);
        let mut coordinates = Vec::with_capacity(2 * base.len());
        for (i, element) in base.iter().enumerate() {
            if element.is_empty() {
                continue;
            }
            add_petal(element, &mut petals);
            let idx = (i + 1) as Symbol;
            // A petal adds its first edge and the reverse of its last edge to
            // the root, in that order.
            coordinates.push(idx);
            coordinates.push(-idx);
        }
        debug_assert_eq!(coordinates.len(), petals.degree(0));
        let petal_size = petals.size();
        let (graph, foldings) = fold(petals);
        tracing::debug!(
            generators = base.len(),
            petal_vertices = petal_size,
            foldings = foldings.len(),
            vertices = graph.size(),
            "folded subgroup"
        );
        Self {
            base,
            foldings,
            graph,
            coordinates,
        }
    }

    /// Subgroup read off a rooted graph: one generator per fundamental cycle
    /// of a spanning tree, restricted to the root's component.
    pub fn from_graph(graph: &Graph) -> Self {
        let base = cycle_base(graph);
        Self::from_base(base)
    }
}

/// `word(u) · label · word(v)⁻¹` for every non-tree edge reachable from the root.
pub(super) fn cycle_base(graph: &Graph) -> Vec<Element> {
    if graph.size() == 0 {
        return Vec::new();
    }
    let tree = graph.spanning_tree();
    tree.cycles
        .iter()
        .filter_map(|&(u, e)| tree.cycle_word(u, e))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Close `element` into a cycle at the root, one new vertex per inner symbol.
fn add_petal(element: &Element, graph: &mut Graph) {
    let factors = element.factors();
    let mut u = 0;
    for (i, &f) in factors.iter().enumerate() {
        let v = if i + 1 < factors.len() {
            graph.add_vertex()
        } else {
            0
        };
        graph.add_edge(u, v, f);
        u = v;
    }
}
