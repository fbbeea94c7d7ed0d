use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::EPOCH;
use crate::config::CpackConfig;
use anyhow::{Context, Result};
use canvas_pack::io::ext_repr::ExtInstance;
use log::{LevelFilter, info, warn};
use serde::Serialize;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

/// Reads the config file, or falls back to the default config if none is given
pub fn read_config(path: Option<&Path>) -> Result<CpackConfig> {
    match path {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            Ok(CpackConfig::default())
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")
        }
    }
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution written to {}",
        fs::canonicalize(path)?.display()
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
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
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[LOG] epoch: {}", jiff::Timestamp::now());
    Ok(())
}
