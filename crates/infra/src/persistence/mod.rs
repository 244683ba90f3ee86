// crates/infra/src/persistence/mod.rs
mod delimited;
mod file_writer;

pub use delimited::{DelimitedPairWriter, HEADER, render_pairs};
pub use file_writer::FileWriter;
