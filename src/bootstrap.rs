// src/bootstrap.rs
use anyhow::{Context, Result};
use file_pairs_infra::{DelimitedPairWriter, GlobPathLister, TracingReporter};
use file_pairs_usecase::{FindFilePairs, FindFilePairsOutput};

use crate::config::Config;

pub fn run(config: &Config) -> Result<FindFilePairsOutput> {
    tracing::info!("finding file pairs");
    tracing::debug!(?config, "resolved configuration");

    let lister = GlobPathLister::with_limit(config.limit);
    let sink = DelimitedPairWriter::new();
    let reporter = TracingReporter::new();
    let command = FindFilePairs::new(&lister, &sink, &reporter);

    command.run(&config.request()).context("find_file_pairs failed")
}
