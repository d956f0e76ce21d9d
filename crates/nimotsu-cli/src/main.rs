//! Nimotsu Sorter - package dispatch classification
//!
//! A CLI tool that sorts packages into STANDARD, SPECIAL, or REJECTED
//! stacks based on their dimensions and mass.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
