use file_pairs_domain::match_file_pairs;
use file_pairs_ports::{
    listing::{FileRole, PathLister},
    output::PairSink,
    progress::PairingReporter,
};
use file_pairs_shared_kernel::{ErrorContext, FilePair, FilePath, Result, path::join_if_relative};

use crate::dto::{FindFilePairsOutput, FindFilePairsRequest};

pub struct FindFilePairs<'a> {
    lister: &'a dyn PathLister,
    sink: &'a dyn PairSink,
    reporter: &'a dyn PairingReporter,
}

impl<'a> FindFilePairs<'a> {
    pub fn new(lister: &'a dyn PathLister, sink: &'a dyn PairSink, reporter: &'a dyn PairingReporter) -> Self {
        Self { lister, sink, reporter }
    }

    /// Runs the whole pipeline. Nothing is written unless matching succeeded.
    pub fn run(&self, request: &FindFilePairsRequest) -> Result<FindFilePairsOutput> {
        let sources = self.list(FileRole::Source, &request.data_path, &request.source_pattern)?;
        let xml_files = self.list(FileRole::Xml, &request.data_path, &request.xml_pattern)?;

        let pair_set = match_file_pairs(&sources, &xml_files).context("finding file pairs")?;
        self.reporter.on_matched(pair_set.strategy, pair_set.len());
        let strategy = pair_set.strategy;

        let mut pairs = pair_set.into_pairs();
        if request.use_relative_paths {
            pairs = to_relative_pairs(&request.data_path, pairs, self.reporter);
        }

        self.sink
            .write_pairs(&request.output, &pairs)
            .with_context(|| format!("saving file pairs to {}", request.output.display()))?;
        self.reporter.on_written(&request.output, pairs.len());

        Ok(FindFilePairsOutput {
            source_count: sources.len(),
            xml_count: xml_files.len(),
            pair_count: pairs.len(),
            strategy,
            output: request.output.clone(),
        })
    }

    fn list(&self, role: FileRole, data_path: &str, pattern: &str) -> Result<Vec<FilePath>> {
        let pattern = join_if_relative(data_path, pattern);
        let paths = self
            .lister
            .list(&pattern)
            .with_context(|| format!("listing {} files", role.label()))?;
        self.reporter.on_listed(role, &pattern, paths.len());
        Ok(paths)
    }
}

/// Rewrites both columns relative to `base`.
///
/// Paths outside of `base` are kept as they are and reported.
pub fn to_relative_pairs(base: &str, pairs: Vec<FilePair>, reporter: &dyn PairingReporter) -> Vec<FilePair> {
    pairs
        .into_iter()
        .map(|pair| {
            pair.map_paths(|path| match path.relative_to(base) {
                Some(relative) => relative,
                None => {
                    reporter.on_outside_base(&path, base);
                    path
                }
            })
        })
        .collect()
}
