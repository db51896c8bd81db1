use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Arranges the sets on the plan
    Layout,
    /// Arranges the sets on the plan starting from a shuffled order, with more iterations
    Alternate,
    /// Scores the arrangement of the plan as is
    Score,
    /// Cuts the footprint of one set out of another
    Cut {
        #[arg(long)]
        cutter: String,
        #[arg(long)]
        target: String,
    },
    /// Removes all cutouts from a set
    Restore {
        #[arg(long)]
        target: String,
    },
}
