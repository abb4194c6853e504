use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use sightline::util::SamplingConfig;
use sightline_cli::io;
use sightline_cli::io::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: SamplingConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SamplingConfig::default()
        }
        Some(config_file) => {
            io::read_json(&config_file).context("incorrect config file format")?
        }
    };
    info!("[MAIN] Successfully parsed SamplingConfig: {config:?}");

    let queries = io::read_queries(&args.input_file)?;
    info!("[MAIN] Evaluating {} queries", queries.len());

    let reports = io::evaluate(&queries, config);
    let n_failed = reports.iter().filter(|r| r.error.is_some()).count();
    if n_failed > 0 {
        warn!("[MAIN] {n_failed} of {} queries failed", reports.len());
    }

    match args.output_file {
        Some(path) => io::write_json(&reports, &path),
        None => io::write_stdout(&reports),
    }
}
