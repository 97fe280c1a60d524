#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # sigvet-kat
//!
//! Known-answer-test tooling for the sigvet diagnostics service:
//! ACVP sigVer vector loading, a rayon-parallel batch runner, and
//! adversarial message patterns for stress testing.
//!
//! The runner never aborts a batch on a bad vector. Undecodable
//! material is counted as a failure and a decode failure, so a vector
//! file full of garbage produces an honest report instead of an error.

pub mod edge;
pub mod loader;
pub mod runner;
pub mod vectors;

pub use edge::edge_messages;
pub use loader::{load_vectors, parse_vectors, KatSourceError};
pub use runner::{run_batch, KatBatchResult, KatVerdict};
pub use vectors::{ExpectedResult, KatVector, SigVerCase, SigVerFile, SigVerGroup};
