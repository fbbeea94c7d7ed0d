use std::path::PathBuf;

use canvas_pack::fsize;
use clap::Parser;
use log::LevelFilter;

use crate::config::CpackConfig;

/// Packs the rectangular elements of a JSON instance onto as few canvas pages as possible
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON instance: canvas, elements and optional layout options
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder in which `sol_<instance>.json` is written, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON driver config, defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Conversion factor for canvases given in cm, overrides the config file
    #[arg(short, long, value_name = "PX_PER_CM")]
    pub pixels_per_cm: Option<fsize>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Applies the overrides given on the command line to `config`
    pub fn override_config(&self, config: CpackConfig) -> CpackConfig {
        CpackConfig {
            pixels_per_cm: self.pixels_per_cm.unwrap_or(config.pixels_per_cm),
            ..config
        }
    }
}
