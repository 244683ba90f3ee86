//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`listing`]: expanding a path pattern into file paths
//! - [`output`]: persisting the matched pairs
//! - [`progress`]: reporting what each stage did
//!
//! The use case only sees these traits, so tests can swap in stubs.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod listing;
pub mod output;
pub mod progress;
