// crates/infra/src/reporting.rs
use std::path::Path;

use file_pairs_ports::{listing::FileRole, progress::PairingReporter};
use file_pairs_shared_kernel::{FilePath, MatchStrategy, path::logical_absolute};

/// `PairingReporter` backed by `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl PairingReporter for TracingReporter {
    fn on_listed(&self, role: FileRole, pattern: &str, count: usize) {
        if count == 0 {
            tracing::warn!(role = role.label(), pattern, "no files found");
        } else {
            tracing::info!(role = role.label(), pattern, count, "found files");
        }
    }

    fn on_matched(&self, strategy: Option<MatchStrategy>, pairs: usize) {
        match strategy {
            Some(strategy) => tracing::info!(%strategy, pairs, "matched file pairs"),
            None => tracing::warn!("nothing to pair, one side is empty"),
        }
    }

    fn on_outside_base(&self, path: &FilePath, base: &str) {
        tracing::warn!(%path, base, "path is not under the data path, keeping it as is");
    }

    fn on_written(&self, output: &Path, rows: usize) {
        tracing::info!(output = %logical_absolute(output).display(), rows, "written results");
    }
}
