use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON file holding a list of queries
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// JSON file holding a sampling configuration
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Report destination, stdout if not specified
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
