//! Free group elements as words over a signed alphabet.
//!
//! Conventions
//! - A factor `k > 0` is the alphabet symbol `k` (1-based), `-k` its formal inverse.
//! - Zero is never a valid factor, and neither is `Symbol::MIN` (its inverse
//!   does not fit); constructors assert both.
//! - Nothing here assumes an alphabet size. `max_symbol` reports the largest
//!   magnitude seen so callers can infer a rank.

use std::fmt;
use std::ops::Mul;

/// Signed alphabet symbol (also used as an edge label).
pub type Symbol = i32;

/// A word in the free group. Not necessarily reduced; see [`Element::reduce`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(Vec<Symbol>);

impl Element {
    /// Wrap `factors` as-is (no reduction).
    pub fn new(factors: Vec<Symbol>) -> Self {
        assert!(
            factors.iter().all(|&f| f != 0),
            "element factors must be non-zero: {factors:?}"
        );
        assert!(
            !factors.contains(&Symbol::MIN),
            "element factor {} has no inverse symbol",
            Symbol::MIN
        );
        Self(factors)
    }

    /// The identity.
    #[inline]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn factors(&self) -> &[Symbol] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest symbol magnitude in the word (0 for the identity).
    pub fn max_symbol(&self) -> Symbol {
        self.0.iter().map(|f| f.abs()).max().unwrap_or(0)
    }

    /// Free reduction: cancel adjacent `x, -x` pairs until none remain.
    pub fn reduce(&self) -> Element {
        let mut out: Vec<Symbol> = Vec::with_capacity(self.0.len());
        for &f in &self.0 {
            if out.last() == Some(&-f) {
                out.pop();
            } else {
                out.push(f);
            }
        }
        Element(out)
    }

    pub fn is_reduced(&self) -> bool {
        self.0.windows(2).all(|w| w[0] != -w[1])
    }

    /// Reverse the word and negate every factor.
    pub fn inverse(&self) -> Element {
        Element(self.0.iter().rev().map(|f| -f).collect())
    }

    /// Free-group product: concatenation followed by free reduction.
    pub fn product(&self, other: &Element) -> Element {
        let mut out = self.reduce().0;
        for &f in &other.reduce().0 {
            if out.last() == Some(&-f) {
                out.pop();
            } else {
                out.push(f);
            }
        }
        Element(out)
    }

    /// Reduce, then strip conjugating pairs `x … -x` from both ends.
    pub fn cyclic_reduce(&self) -> Element {
        let reduced = self.reduce().0;
        let (mut lo, mut hi) = (0usize, reduced.len());
        while hi - lo >= 2 && reduced[lo] == -reduced[hi - 1] {
            lo += 1;
            hi -= 1;
        }
        Element(reduced[lo..hi].to_vec())
    }
}

impl From<Vec<Symbol>> for Element {
    fn from(factors: Vec<Symbol>) -> Self {
        Element::new(factors)
    }
}

impl From<&[Symbol]> for Element {
    fn from(factors: &[Symbol]) -> Self {
        Element::new(factors.to_vec())
    }
}

impl FromIterator<Symbol> for Element {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Element::new(iter.into_iter().collect())
    }
}

impl<'a> Mul<&'a Element> for &'a Element {
    type Output = Element;
    #[inline]
    fn mul(self, rhs: &'a Element) -> Element {
        self.product(rhs)
    }
}

impl Mul for Element {
    type Output = Element;
    #[inline]
    fn mul(self, rhs: Element) -> Element {
        self.product(&rhs)
    }
}

/// Letter rendering of a single signed symbol (`a`, `-b`, `x27` past `z`).
pub(crate) fn fmt_symbol(f: &mut fmt::Formatter<'_>, s: Symbol) -> fmt::Result {
    if s < 0 {
        write!(f, "-")?;
    }
    let m = s.unsigned_abs();
    if (1..=26).contains(&m) {
        write!(f, "{}", char::from(b'a' + (m - 1) as u8))
    } else {
        write!(f, "x{m}")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "1");
        }
        for (i, &s) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            fmt_symbol(f, s)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(f: &[Symbol]) -> Element {
        Element::from(f)
    }

    #[test]
    fn reduce_cancels_nested_pairs() {
        assert_eq!(el(&[1, 2, -2, -1, 3]).reduce(), el(&[3]));
        assert_eq!(el(&[1, -1]).reduce(), Element::empty());
        assert!(el(&[1, 2, 1]).is_reduced());
        assert!(!el(&[1, 2, -2]).is_reduced());
    }

    #[test]
    fn product_cancels_at_seam() {
        let ab = el(&[1, 2]);
        let b_inv_c = el(&[-2, 3]);
        assert_eq!(ab.product(&b_inv_c), el(&[1, 3]));
        assert_eq!(&ab * &ab.inverse(), Element::empty());
    }

    #[test]
    fn cyclic_reduce_strips_conjugation() {
        assert_eq!(el(&[1, 2, 3, -1]).cyclic_reduce(), el(&[2, 3]));
        assert_eq!(el(&[1, -1]).cyclic_reduce(), Element::empty());
        assert_eq!(el(&[2]).cyclic_reduce(), el(&[2]));
    }

    #[test]
    fn display_uses_letters() {
        assert_eq!(el(&[1, -2, 27]).to_string(), "a -b x27");
        assert_eq!(Element::empty().to_string(), "1");
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn zero_factor_is_rejected() {
        let _ = el(&[1, 0]);
    }

    #[test]
    #[should_panic(expected = "no inverse")]
    fn min_symbol_is_rejected() {
        let _ = el(&[2, Symbol::MIN]);
    }
}
