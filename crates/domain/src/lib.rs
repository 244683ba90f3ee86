//! # Domain
//!
//! Pure pairing rules: how listed paths are grouped and matched into
//! (source, xml) pairs, plus the value objects describing patterns and
//! the output delimiter. Nothing here touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod grouping;
pub mod matching;
pub mod model;
pub mod options;
pub mod value_objects;

pub use matching::match_file_pairs;
pub use model::PairSet;
