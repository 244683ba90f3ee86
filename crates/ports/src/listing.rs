// crates/ports/src/listing.rs
use file_pairs_shared_kernel::{FilePath, Result};

/// Which side of the pairing a listing feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Source,
    Xml,
}

impl FileRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Xml => "xml",
        }
    }
}

/// Port for expanding a pattern into file paths.
///
/// Implementations must return the same order for the same filesystem state.
pub trait PathLister: Send + Sync {
    fn list(&self, pattern: &str) -> Result<Vec<FilePath>>;
}
