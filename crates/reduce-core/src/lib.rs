#![deny(missing_docs)]
//! Shared error type and deterministic RNG helpers for the reduce workspace.
//!
//! Graph-local identifiers (`Vertex`) live in `reduce-graph` rather than here,
//! since the workspace has exactly one concrete graph representation and no
//! need for a trait-object boundary around it.

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, ReduceError};
pub use rng::{derive_substream_seed, RngHandle};
