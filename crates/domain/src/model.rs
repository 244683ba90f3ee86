// crates/domain/src/model.rs
use serde::Serialize;

pub use file_pairs_shared_kernel::{FilePair, FilePath, MatchStrategy};

/// Ordered matcher output together with the grouping pass that produced it.
///
/// `strategy` is `None` only when one side was empty and nothing was grouped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PairSet {
    pub strategy: Option<MatchStrategy>,
    pub pairs: Vec<FilePair>,
}

impl PairSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(strategy: MatchStrategy, pairs: Vec<FilePair>) -> Self {
        Self { strategy: Some(strategy), pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<FilePair> {
        self.pairs
    }
}
