//! Whitehead automorphisms of the free group.
//!
//! For a pivot symbol `s` and a cut set `A` of signed symbols (not containing
//! `±s`), every factor `x ∉ {s, -s}` is rewritten as
//! `(-s if -x ∈ A) · x · (s if x ∈ A)`, and `±s` is left alone. The word is
//! reduced afterwards. Only the rewrite lives here; searching for a
//! length-minimizing sequence of automorphisms is left to callers.

use std::collections::BTreeSet;

use crate::element::{Element, Symbol};

/// Whitehead automorphism `(A, s)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhiteheadAutomorphism {
    pub pivot: Symbol,
    pub cut: BTreeSet<Symbol>,
}

impl WhiteheadAutomorphism {
    pub fn new(pivot: Symbol, cut: impl IntoIterator<Item = Symbol>) -> Self {
        assert!(
            pivot != 0 && pivot != Symbol::MIN,
            "pivot must be a non-zero invertible symbol"
        );
        Self {
            pivot,
            cut: cut.into_iter().collect(),
        }
    }

    /// Image of `element` (reduced).
    pub fn apply(&self, element: &Element) -> Element {
        let s = self.pivot;
        let mut out = Vec::with_capacity(element.len() * 3);
        for &x in element.factors() {
            if x == s || x == -s {
                out.push(x);
                continue;
            }
            if self.cut.contains(&-x) {
                out.push(-s);
            }
            out.push(x);
            if self.cut.contains(&x) {
                out.push(s);
            }
        }
        Element::new(out).reduce()
    }

    /// Apply to every element of `base`.
    pub fn apply_all(&self, base: &[Element]) -> Vec<Element> {
        base.iter().map(|e| self.apply(e)).collect()
    }
}

/// Sum of cyclically reduced lengths: the quantity Whitehead reductions lower.
pub fn cyclic_length(base: &[Element]) -> usize {
    base.iter().map(|e| e.cyclic_reduce().len()).sum()
}
