// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use find_file_pairs::{Args, Config, bootstrap, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_level());

    let result = Config::try_from(args).map_err(anyhow::Error::from).and_then(|config| bootstrap::run(&config));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Workspace errors already render their own source chain.
            let detail = e.chain().nth(1).map(|cause| format!(": {cause}")).unwrap_or_default();
            eprintln!("Error: {e}{detail}");
            ExitCode::FAILURE
        }
    }
}
