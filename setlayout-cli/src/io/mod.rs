use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use serde::Serialize;
use setlayout::io::ext_repr::ExtPlan;

use crate::EPOCH;
use crate::config::CliConfig;

pub mod cli;
pub mod output;

pub fn read_plan(path: &Path) -> Result<ExtPlan> {
    let file = File::open(path).with_context(|| format!("could not open plan file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("could not parse plan file: {}", path.display()))
}

/// Reads and validates the config file, falling back to the default config if none is provided
pub fn read_config(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        None => {
            warn!("[IO] no config file provided, use --config-file to provide a custom config");
            Ok(CliConfig::default())
        }
        Some(path) => {
            let file = File::open(path).with_context(|| format!("could not open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: CliConfig = serde_json::from_reader(reader).context("incorrect config file format")?;
            config
                .layout
                .validate()
                .with_context(|| format!("invalid layout config in {}", path.display()))?;
            Ok(config)
        }
    }
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("[IO] solution written to {}", fs::canonicalize(path)?.display());
    Ok(())
}

/// Log target without the crate prefix of the library, e.g. `opt::optimizer` for `setlayout::opt::optimizer`
pub fn short_target(target: &str) -> &str {
    target.strip_prefix("setlayout::").unwrap_or(target)
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed();
            let millis = elapsed.subsec_millis();
            let secs = elapsed.as_secs();
            let target = short_target(record.target());

            out.finish(format_args!(
                "{:>5} {:>4}.{:0>3}s [{}] {:<16} {}",
                record.level(),
                secs,
                millis,
                std::thread::current().name().unwrap_or("-"),
                target,
                message
            ))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[IO] time: {:.0}", jiff::Timestamp::now());
    Ok(())
}
