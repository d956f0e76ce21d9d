//! CLI definition using clap

use clap::{Parser, Subcommand};
use nimotsu_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nimotsu-sorter")]
#[command(version)]
#[command(about = "Sort packages into STANDARD / SPECIAL / REJECTED stacks")]
#[command(long_about = None)]
pub struct Cli {
    /// Runs the interactive prompt when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort a single package from command-line measurements
    Sort {
        /// Width in centimeters
        width: f64,

        /// Height in centimeters
        height: f64,

        /// Length in centimeters
        length: f64,

        /// Mass in kilograms
        mass: f64,
    },

    /// Sort packages listed in a CSV file
    Batch {
        /// Path to CSV file (label, width_cm, height_cm, length_cm, mass_kg)
        input: PathBuf,

        /// Output file for JSON results
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,
    },
}
