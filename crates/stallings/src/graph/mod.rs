//! Labeled multigraph over dense vertex ids (adjacency lists).
//!
//! Purpose
//! - Carry the petal graph, every intermediate folding state, and the final
//!   Stallings automaton with one representation.
//! - Provide the traversal primitives the subgroup layer needs: label lookup,
//!   BFS shortest paths, a union-find spanning forest, quotients, rooted
//!   isomorphism and the synchronized product (pullback).
//!
//! Conventions
//! - Vertices are `0..size()`; vertex 0 is the root.
//! - `add_edge(u, v, l)` stores both `(u → v, l)` and `(v → u, -l)`. A self-loop
//!   therefore shows up twice in the same adjacency list.
//! - Adjacency order is insertion order and is significant: repeated-edge
//!   search and spanning trees scan vertices by index, then adjacency order.
//!
//! Split
//! - `types.rs` (edge, graph, repeated-edge scan), `paths.rs` (BFS and
//!   spanning tree), `product.rs` (quotient, isomorphism, pullback).

mod paths;
mod product;
mod types;

pub use paths::{ShortestPaths, SpanningTree};
pub use types::{Edge, Graph, Label, Path, RepeatedEdge, Vertex};
