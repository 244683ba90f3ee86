// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod reporting;

pub use filesystem::GlobPathLister;
pub use persistence::DelimitedPairWriter;
pub use reporting::TracingReporter;
