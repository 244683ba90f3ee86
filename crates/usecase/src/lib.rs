//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: lists both patterns, matches, relativizes and emits
//! - [`dto`]: request and summary types at the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{FindFilePairsOutput, FindFilePairsRequest};
pub use orchestrator::{FindFilePairs, to_relative_pairs};
