// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "find_file_pairs",
    version,
    about = "ソースファイルと XML ファイルの対応表 (CSV/TSV) を作成する"
)]
pub struct Args {
    /// 基準データパス (相対パターンの起点)
    #[arg(long, value_name = "DIR")]
    pub data_path: String,

    /// ソースファイルのパターン (例: */*.pdf)
    #[arg(long, value_name = "GLOB")]
    pub source_pattern: String,

    /// XML ファイルのパターン (例: */*.xml.gz)
    #[arg(long, value_name = "GLOB")]
    pub xml_pattern: String,

    /// 出力ファイル (.tsv ならタブ区切り、それ以外はカンマ区切り)
    #[arg(long, value_name = "FILE")]
    pub out: PathBuf,

    /// データパスからの相対パスで出力する
    #[arg(long)]
    pub use_relative_paths: bool,

    /// 各パターンで取得するファイル数の上限
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// デバッグログを有効にする
    #[arg(long)]
    pub debug: bool,

    /// ログを詳細にする (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// ログを抑制する (-q, -qq)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    /// INFO by default; each -v raises and each -q lowers one step, --debug forces at least DEBUG.
    pub fn log_level(&self) -> Level {
        const LEVELS: [Level; 5] = [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE];
        let mut index = (2 + i16::from(self.verbose) - i16::from(self.quiet)).clamp(0, 4) as usize;
        if self.debug {
            index = index.max(3);
        }
        LEVELS[index]
    }
}
