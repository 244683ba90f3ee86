// src/config.rs
use std::path::PathBuf;

use file_pairs_shared_kernel::{PresentationError, PresentationResult};
use file_pairs_usecase::FindFilePairsRequest;

use crate::cli::Args;

/// Validated run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: String,
    pub source_pattern: String,
    pub xml_pattern: String,
    pub output: PathBuf,
    pub use_relative_paths: bool,
    pub limit: Option<usize>,
}

impl Config {
    pub fn request(&self) -> FindFilePairsRequest {
        FindFilePairsRequest {
            data_path: self.data_path.clone(),
            source_pattern: self.source_pattern.clone(),
            xml_pattern: self.xml_pattern.clone(),
            output: self.output.clone(),
            use_relative_paths: self.use_relative_paths,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        require_non_empty("--data-path", &args.data_path)?;
        require_non_empty("--source-pattern", &args.source_pattern)?;
        require_non_empty("--xml-pattern", &args.xml_pattern)?;
        if args.out.as_os_str().is_empty() {
            return Err(invalid("--out", "", "must not be empty"));
        }
        if args.limit == Some(0) {
            return Err(invalid("--limit", "0", "must be at least 1"));
        }

        Ok(Self {
            data_path: args.data_path,
            source_pattern: args.source_pattern,
            xml_pattern: args.xml_pattern,
            output: args.out,
            use_relative_paths: args.use_relative_paths,
            limit: args.limit,
        })
    }
}

fn require_non_empty(flag: &str, value: &str) -> PresentationResult<()> {
    if value.trim().is_empty() { Err(invalid(flag, value, "must not be empty")) } else { Ok(()) }
}

fn invalid(flag: &str, value: &str, reason: &str) -> PresentationError {
    PresentationError::InvalidValue { flag: flag.to_string(), value: value.to_string(), reason: reason.to_string() }
}
