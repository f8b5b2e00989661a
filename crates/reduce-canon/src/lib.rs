#![deny(missing_docs)]
//! Reference canonical-labeling oracle for vertex-colored simple graphs.
//!
//! This crate stands in for the out-of-core collaborator `spec.md` describes
//! only through its callback interface (generators delivered one at a time,
//! stabilizer index entries delivered per refinement level). It implements
//! that interface end to end: equitable partition refinement (1-dimensional
//! Weisfeiler-Leman color refinement) composed with individualization,
//! backtracking over every non-singleton cell to enumerate discrete leaves,
//! and reading the automorphism group off the leaves that reproduce the
//! lexicographically smallest induced graph.
//!
//! `reduce-graph` depends on this crate, not the other way around: the input
//! type [`ColoredGraph`] is a plain, owned snapshot, so there is no cycle back
//! to `reduce-graph::Graph`.

mod refine;
mod search;

pub use refine::ColoredGraph;
pub use search::{canonicalize, CanonResult};
