// crates/shared-kernel/src/value_objects/file_path.rs
use std::{borrow::Borrow, fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::path;

/// A file location as produced by a listing, kept as the exact string it was listed with.
///
/// Equality, ordering and grouping all operate on the string, not on the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FilePath(String);

impl FilePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn parent_dir(&self) -> &str {
        path::parent_dir(&self.0)
    }

    pub fn file_name(&self) -> &str {
        path::file_name(&self.0)
    }

    pub fn name_without_extension(&self) -> &str {
        path::name_without_extension(&self.0)
    }

    /// Rewrites the path relative to `base`; `None` when it is not located under `base`.
    pub fn relative_to(&self, base: &str) -> Option<Self> {
        path::relative_to(base, &self.0).map(Self)
    }
}

impl From<&str> for FilePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FilePath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }
}

impl AsRef<str> for FilePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl Borrow<str> for FilePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
