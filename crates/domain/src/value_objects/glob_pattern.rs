// crates/domain/src/value_objects/glob_pattern.rs
use std::path::Path;

use file_pairs_shared_kernel::{DomainError, DomainResult};
use globset::{GlobBuilder, GlobMatcher};

const META_CHARS: &[char] = &['*', '?', '[', '{'];

/// A path pattern split into its literal directory prefix and a compiled matcher.
///
/// `*` and `?` never cross a `/`; `**` spans any number of directories.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    original: String,
    base_dir: String,
    depth: Option<usize>,
    matcher: Option<GlobMatcher>,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> DomainResult<Self> {
        let segments: Vec<&str> = pattern.split('/').collect();
        let literal = segments.iter().take_while(|s| !has_meta(s)).count();

        if literal == segments.len() {
            return Ok(Self { original: pattern.to_string(), base_dir: pattern.to_string(), depth: Some(0), matcher: None });
        }

        let base_dir = match &segments[..literal] {
            [""] => "/".to_string(),
            prefix => prefix.join("/"),
        };
        let rest = &segments[literal..];
        let depth = if rest.contains(&"**") { None } else { Some(rest.len()) };

        let glob = GlobBuilder::new(pattern).literal_separator(true).build().map_err(|err| {
            DomainError::InvalidPattern { pattern: pattern.to_string(), details: err.kind().to_string(), source: Some(Box::new(err)) }
        })?;

        Ok(Self { original: pattern.to_string(), base_dir, depth, matcher: Some(glob.compile_matcher()) })
    }

    /// Longest leading run of segments without glob syntax; `""` when the pattern starts with one.
    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    /// Directory levels below [`Self::base_dir`] a match can sit at, `None` for `**`.
    pub fn max_depth(&self) -> Option<usize> {
        self.depth
    }

    /// True when the pattern names a single path without any glob syntax.
    pub fn is_literal(&self) -> bool {
        self.matcher.is_none()
    }

    pub fn matches_path(&self, path: &Path) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(path),
            None => path == Path::new(&self.original),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}

fn has_meta(segment: &str) -> bool {
    segment.contains(META_CHARS)
}
