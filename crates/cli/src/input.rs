//! Words and bases from JSON arguments (`[1,-2]`, `[[1,2],[-1,2,1]]`).

use anyhow::{bail, Context, Result};
use stallings::{Element, Symbol};

fn check_factors(factors: &[Symbol], raw: &str) -> Result<()> {
    if let Some(pos) = factors.iter().position(|&f| f == 0) {
        bail!("word {raw} has a zero factor at position {pos}");
    }
    if let Some(pos) = factors.iter().position(|&f| f == Symbol::MIN) {
        bail!("word {raw} has factor {} at position {pos}, which has no inverse", Symbol::MIN);
    }
    Ok(())
}

/// One element from a JSON array of non-zero integers.
pub fn parse_word(raw: &str) -> Result<Element> {
    let factors: Vec<Symbol> = serde_json::from_str(raw)
        .with_context(|| format!("parsing word {raw:?} as a JSON integer array"))?;
    check_factors(&factors, raw)?;
    Ok(Element::new(factors))
}

/// A base from a JSON array of words.
pub fn parse_base(raw: &str) -> Result<Vec<Element>> {
    let words: Vec<Vec<Symbol>> = serde_json::from_str(raw)
        .with_context(|| format!("parsing base {raw:?} as a JSON array of integer arrays"))?;
    words
        .into_iter()
        .map(|factors| {
            check_factors(&factors, raw)?;
            Ok(Element::new(factors))
        })
        .collect()
}
