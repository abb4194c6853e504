use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sightline::io::ext_repr::{ExtAnswer, ExtQuery};
use sightline::io::query::run_query;
use sightline::util::SamplingConfig;

use crate::EPOCH;

pub mod cli;

/// Outcome of a single query of the input file, failed queries carry their error message
#[derive(Serialize, Debug, Clone)]
pub struct QueryReport {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<ExtAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Evaluates every query, a failing query does not stop the others
pub fn evaluate(queries: &[ExtQuery], config: SamplingConfig) -> Vec<QueryReport> {
    queries
        .iter()
        .enumerate()
        .map(|(index, query)| match run_query(query, config) {
            Ok(answer) => QueryReport {
                index,
                answer: Some(answer),
                error: None,
            },
            Err(err) => {
                warn!("[EVAL] query {index} failed: {err}");
                QueryReport {
                    index,
                    answer: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect()
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).context(format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context(format!("could not parse file: {}", path.display()))
}

pub fn read_queries(path: &Path) -> Result<Vec<ExtQuery>> {
    read_json(path)
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)?;
    info!(
        "[IO] report written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_stdout(json: &impl Serialize) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, json)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        // stdout is reserved for the report
        .chain(std::io::stderr())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
