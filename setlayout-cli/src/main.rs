use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::info;
use setlayout_cli::commands;
use setlayout_cli::io::cli::Cli;
use setlayout_cli::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = io::read_config(args.config_file.as_deref())?;
    info!("[MAIN] successfully parsed config: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file: {}", args.input_file.display()))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {}", args.solution_folder.display())
        })?;
    }

    let ext_plan = io::read_plan(&args.input_file)?;
    let output = commands::run(&args.command, &ext_plan, &config)?;

    let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, &solution_path)?;

    info!("[MAIN] {:?} finished in {}ms", args.command, EPOCH.elapsed().as_millis());
    Ok(())
}
