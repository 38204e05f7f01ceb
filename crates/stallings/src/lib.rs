//! Stallings graphs for finitely generated subgroups of free groups.
//!
//! Layout
//! - `element`: reduced words over signed generator symbols (`a = 1`, `a⁻¹ = -1`).
//! - `graph`: labeled multigraph with BFS, spanning trees, quotients and pullbacks.
//! - `folding`: Stallings folding steps and lifting of paths across them.
//! - `subgroup`: the subgroup object (membership, coordinates, index, cosets,
//!   intersection, fringe).
//! - `whitehead`: Whitehead automorphisms on elements and bases.
//! - `random`: reproducible random words for tests, benches and the CLI.
//!
//! API Policy
//! - Workspace-internal; the CLI is the only downstream consumer. Breaking
//!   changes are fine when they simplify the model.

pub mod element;
pub mod error;
pub mod folding;
pub mod graph;
pub mod random;
pub mod subgroup;
pub mod whitehead;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use element::{Element, Symbol};
pub use error::StallingsError;
pub use subgroup::{FringeCfg, Index, Subgroup};

/// Common exports for callers.
pub mod prelude {
    pub use crate::element::{Element, Symbol};
    pub use crate::error::StallingsError;
    pub use crate::folding::{fold, Folding};
    pub use crate::graph::{Edge, Graph, Path, Vertex};
    pub use crate::random::{draw_base, draw_word, ReplayToken, WordCfg};
    pub use crate::subgroup::{FringeCfg, Index, Subgroup};
    pub use crate::whitehead::{cyclic_length, WhiteheadAutomorphism};
}
