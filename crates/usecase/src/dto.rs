// crates/usecase/src/dto.rs
use std::path::PathBuf;

use file_pairs_shared_kernel::MatchStrategy;

/// Everything one run needs to know.
#[derive(Debug, Clone)]
pub struct FindFilePairsRequest {
    /// Base that relative patterns are joined onto and relative output is computed against.
    pub data_path: String,
    pub source_pattern: String,
    pub xml_pattern: String,
    pub output: PathBuf,
    pub use_relative_paths: bool,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindFilePairsOutput {
    pub source_count: usize,
    pub xml_count: usize,
    pub pair_count: usize,
    pub strategy: Option<MatchStrategy>,
    pub output: PathBuf,
}
