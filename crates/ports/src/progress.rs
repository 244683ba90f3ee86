// crates/ports/src/progress.rs
use std::path::Path;

use file_pairs_shared_kernel::{FilePath, MatchStrategy};

use crate::listing::FileRole;

/// Handle each stage reports through; the entry point decides where it goes.
pub trait PairingReporter: Send + Sync {
    fn on_listed(&self, role: FileRole, pattern: &str, count: usize);
    fn on_matched(&self, strategy: Option<MatchStrategy>, pairs: usize);
    fn on_outside_base(&self, path: &FilePath, base: &str);
    fn on_written(&self, output: &Path, rows: usize);
}

/// Reporter that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl PairingReporter for SilentReporter {
    fn on_listed(&self, _role: FileRole, _pattern: &str, _count: usize) {}
    fn on_matched(&self, _strategy: Option<MatchStrategy>, _pairs: usize) {}
    fn on_outside_base(&self, _path: &FilePath, _base: &str) {}
    fn on_written(&self, _output: &Path, _rows: usize) {}
}
