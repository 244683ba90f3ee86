// crates/shared-kernel/src/value_objects/file_pair.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::FilePath;

/// A matched (source, xml) row of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePair {
    pub source: FilePath,
    pub target: FilePath,
}

impl FilePair {
    pub fn new(source: impl Into<FilePath>, target: impl Into<FilePath>) -> Self {
        Self { source: source.into(), target: target.into() }
    }

    /// Applies `f` to both sides, keeping the column order.
    pub fn map_paths<F>(self, mut f: F) -> Self
    where
        F: FnMut(FilePath) -> FilePath,
    {
        Self { source: f(self.source), target: f(self.target) }
    }
}

/// Which grouping pass produced a set of pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    ParentDirectory,
    NameWithoutExtension,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ParentDirectory => "parent directory",
            Self::NameWithoutExtension => "name without extension",
        };
        f.write_str(label)
    }
}
