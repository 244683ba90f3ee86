// crates/ports/src/output.rs
use std::path::Path;

use file_pairs_shared_kernel::{FilePair, Result};

/// Port for persisting matched pairs. Overwrites whatever is at `output`.
pub trait PairSink: Send + Sync {
    fn write_pairs(&self, output: &Path, pairs: &[FilePair]) -> Result<()>;
}
