use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use canvas_pack::io::{Importer, export_solution};
use canvas_pack::opt::MultiPageOptimizer;
use clap::Parser as ClapParser;
use cpack::config::CpackConfig;
use cpack::io::cli::Cli;
use cpack::io::output::CpackOutput;
use cpack::{EPOCH, io};
use log::info;
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = args.override_config(io::read_config(args.config_file.as_deref())?);
    ensure!(
        config.pixels_per_cm > 0.0,
        "pixels per cm must be positive, got {}",
        config.pixels_per_cm
    );
    info!("[MAIN] Successfully parsed CpackConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let importer = Importer::new(config.pixels_per_cm, config.layout_options);
    let instance = importer.import_instance(&ext_instance)?;

    info!(
        "[MAIN] packing {} elements ({} px² in total) onto {}x{} px pages",
        instance.elements.len(),
        (instance.total_element_area().round() as u64).separate_with_commas(),
        instance.canvas.width,
        instance.canvas.height
    );

    let result = MultiPageOptimizer::new(instance.canvas, instance.options).solve(&instance.elements);

    info!(
        "[MAIN] {} page(s), efficiency {:.2}%, {} px² wasted",
        result.pages_used,
        result.efficiency,
        (result.wasted_space.round() as u64).separate_with_commas()
    );

    let output = CpackOutput {
        instance: ext_instance,
        solution: export_solution(&result, &instance.canvas, *EPOCH),
        config: CpackConfig {
            layout_options: instance.options,
            ..config
        },
    };

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
