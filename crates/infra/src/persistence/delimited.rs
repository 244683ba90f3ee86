// crates/infra/src/persistence/delimited.rs
use std::path::Path;

use file_pairs_domain::options::Delimiter;
use file_pairs_ports::output::PairSink;
use file_pairs_shared_kernel::{FilePair, InfraResult, InfrastructureError, Result};

use super::FileWriter;

/// Header row of every manifest.
pub const HEADER: [&str; 2] = ["source_url", "xml_url"];

/// Writes pairs as a two-column CSV/TSV manifest, delimiter picked from the output extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct DelimitedPairWriter;

impl DelimitedPairWriter {
    pub fn new() -> Self {
        Self
    }
}

impl PairSink for DelimitedPairWriter {
    fn write_pairs(&self, output: &Path, pairs: &[FilePair]) -> Result<()> {
        let data = render_pairs(pairs, Delimiter::from_path(output))?;
        FileWriter::ensure_parent_dir(output)?;
        FileWriter::atomic_write(output, &data)?;
        Ok(())
    }
}

/// Serializes the header and one row per pair.
///
/// Fields are quoted only when they contain the delimiter, a quote or a line break.
pub fn render_pairs(pairs: &[FilePair], delimiter: Delimiter) -> InfraResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(HEADER).map_err(serialization_error)?;
    for pair in pairs {
        writer
            .write_record([pair.source.as_str(), pair.target.as_str()])
            .map_err(serialization_error)?;
    }
    writer.into_inner().map_err(|err| InfrastructureError::SerializationError {
        format: "CSV".to_string(),
        details: err.error().to_string(),
    })
}

fn serialization_error(err: csv::Error) -> InfrastructureError {
    InfrastructureError::SerializationError { format: "CSV".to_string(), details: err.to_string() }
}
