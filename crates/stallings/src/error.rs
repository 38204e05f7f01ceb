use std::fmt;

/// Errors surfaced by subgroup queries whose answer does not exist.
///
/// Programmer errors (zero factors, broken folding invariants) panic instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StallingsError {
    /// The element is not accepted by the Stallings graph.
    NotAMember,
    /// A finite-index-only query was asked of an infinite-index subgroup.
    InfiniteIndex { rank: usize },
    /// Fringe enumeration refused: too many vertices for the configured bound.
    FringeTooLarge { vertices: usize, limit: usize },
}

impl fmt::Display for StallingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAMember => write!(f, "element is not a member of the subgroup"),
            Self::InfiniteIndex { rank } => {
                write!(f, "subgroup has infinite index in the free group of rank {rank}")
            }
            Self::FringeTooLarge { vertices, limit } => write!(
                f,
                "fringe enumeration needs at most {limit} vertices, graph has {vertices}"
            ),
        }
    }
}

impl std::error::Error for StallingsError {}
