//! String-structural path helpers.
//!
//! Grouping works on the textual shape of a path, never on filesystem state,
//! so these helpers only look at separators and dots.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Extensions that wrap another format and are stripped together with it.
const COMPRESSION_EXTENSIONS: &[&str] = &["gz"];

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Joins `pattern` onto `base` unless the pattern is already absolute.
pub fn join_if_relative(base: &str, pattern: &str) -> String {
    if base.is_empty() || Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    format!("{}/{}", base.trim_end_matches(is_separator), pattern)
}

/// Path of `path` relative to `base`, or `None` when it lies outside of it.
///
/// The comparison is component-wise, so `/data` is not a prefix of `/database/x`.
pub fn relative_to(base: &str, path: &str) -> Option<String> {
    let stripped = Path::new(path).strip_prefix(Path::new(base)).ok()?;
    Some(stripped.to_string_lossy().into_owned())
}

/// Everything before the last separator (`""` for a bare file name, `"/"` for root entries).
pub fn parent_dir(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(0) => &path[..1],
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Everything after the last separator.
pub fn file_name(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Final extension of a file name, without the dot.
pub fn extension(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&name[idx + 1..]),
    }
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(idx) => &name[..idx],
    }
}

/// File name with its extension removed; `doc.xml.gz` loses both suffixes.
pub fn name_without_extension(path: &str) -> &str {
    let name = file_name(path);
    let stem = strip_extension(name);
    match extension(name) {
        Some(ext) if COMPRESSION_EXTENSIONS.iter().any(|c| ext.eq_ignore_ascii_case(c)) => strip_extension(stem),
        _ => stem,
    }
}
