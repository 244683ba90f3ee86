// crates/infra/src/filesystem.rs
use std::path::Path;

use file_pairs_domain::value_objects::GlobPattern;
use file_pairs_ports::listing::PathLister;
use file_pairs_shared_kernel::{FilePath, InfrastructureError, Result};
use ignore::WalkBuilder;

/// Filesystem adapter implementing the `PathLister` port with glob patterns.
///
/// Hidden files and ignore files are not filtered: the listing reflects what is on disk.
#[derive(Debug, Default, Clone)]
pub struct GlobPathLister {
    limit: Option<usize>,
}

impl GlobPathLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the first `limit` paths of every listing.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { limit }
    }

    pub fn expand(&self, pattern: &str) -> Result<Vec<FilePath>> {
        let glob = GlobPattern::new(pattern).map_err(|err| InfrastructureError::ListingFailure {
            pattern: pattern.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        let mut paths = if glob.is_literal() { list_literal(&glob) } else { walk_matches(&glob)? };

        paths.sort();
        paths.dedup();

        if let Some(limit) = self.limit
            && paths.len() > limit
        {
            tracing::info!(pattern, found = paths.len(), limit, "limiting listed files");
            paths.truncate(limit);
        }
        Ok(paths)
    }
}

impl PathLister for GlobPathLister {
    fn list(&self, pattern: &str) -> Result<Vec<FilePath>> {
        self.expand(pattern)
    }
}

fn list_literal(glob: &GlobPattern) -> Vec<FilePath> {
    let path = Path::new(glob.pattern());
    if path.is_file() { vec![FilePath::from(glob.pattern())] } else { Vec::new() }
}

fn walk_matches(glob: &GlobPattern) -> Result<Vec<FilePath>> {
    // Relative patterns without a literal prefix are walked from "." and
    // matched without the "./" the walker prepends.
    let (root, strip_dot) = match glob.base_dir() {
        "" => (Path::new("."), true),
        base => (Path::new(base), false),
    };
    if !root.is_dir() {
        tracing::debug!(pattern = glob.pattern(), root = %root.display(), "pattern root does not exist");
        return Ok(Vec::new());
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false).max_depth(glob.max_depth());

    let mut paths = Vec::new();
    for result in builder.build() {
        let entry = result.map_err(|err| listing_failure(glob.pattern(), err))?;
        if !is_listable_file(&entry) {
            continue;
        }
        let path = entry.path();
        let candidate = if strip_dot { path.strip_prefix(".").unwrap_or(path) } else { path };
        if glob.matches_path(candidate) {
            paths.push(FilePath::from(candidate));
        }
    }
    Ok(paths)
}

/// Regular files, plus symlinks that resolve to one, like the literal branch.
fn is_listable_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => std::fs::metadata(entry.path()).is_ok_and(|m| m.is_file()),
        _ => false,
    }
}

fn listing_failure(pattern: &str, err: ignore::Error) -> InfrastructureError {
    InfrastructureError::ListingFailure {
        pattern: pattern.to_string(),
        details: err.to_string(),
        source: Some(Box::new(err)),
    }
}
