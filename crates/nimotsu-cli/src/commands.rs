//! Command handlers

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::{output_batch, output_result, BatchResults};
use nimotsu_domain::model::Package;
use nimotsu_domain::service::sort_packages;
use nimotsu_infra::package_csv::load_packages_from_csv;
use nimotsu_types::{Error, OutputFormat, Result};
use std::io::Write;
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    match cli.command {
        None => cmd_interactive(&config),
        Some(Commands::Sort {
            width,
            height,
            length,
            mass,
        }) => cmd_sort(&config, width, height, length, mass),
        Some(Commands::Batch { input, output }) => cmd_batch(&config, input, output),
        Some(Commands::Config { show, set_output }) => cmd_config(show, set_output),
    }
}

/// Interactive mode: prompt for each measurement, then sort
fn cmd_interactive(config: &Config) -> Result<()> {
    println!("Nimotsu Sorter - Package Dispatch");
    println!("=================================");

    let width = read_positive_number("Enter package width (cm): ")?;
    let height = read_positive_number("Enter package height (cm): ")?;
    let length = read_positive_number("Enter package length (cm): ")?;
    let mass = read_positive_number("Enter package mass (kg): ")?;

    let package = Package::new(width, height, length, mass);
    output_single(config.output_format, &package)
}

/// Prompt until a positive finite number is entered
fn read_positive_number(prompt: &str) -> Result<f64> {
    let stdin = std::io::stdin();
    loop {
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            // stdin closed mid-prompt
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input ended before all measurements were entered",
            )));
        }

        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => return Ok(value),
            Ok(_) => println!("Input must be a positive number."),
            Err(_) => println!("Invalid input. Please enter a numeric value."),
        }
    }
}

fn cmd_sort(config: &Config, width: f64, height: f64, length: f64, mass: f64) -> Result<()> {
    let package = Package::new(width, height, length, mass);
    if !package.is_measurable() {
        return Err(Error::InvalidMeasurement(format!(
            "all measurements must be positive finite numbers, got {} x {} x {} cm, {} kg",
            width, height, length, mass
        )));
    }
    output_single(config.output_format, &package)
}

fn output_single(output_format: OutputFormat, package: &Package) -> Result<()> {
    let results = sort_packages(std::slice::from_ref(package));
    output_result(output_format, &results[0])
}

fn cmd_batch(config: &Config, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !input.exists() {
        return Err(Error::FileNotFound(input.display().to_string()));
    }

    let packages = load_packages_from_csv(&input).map_err(Error::CsvLoader)?;
    let results = sort_packages(&packages);

    if let Some(output_path) = output {
        let batch = BatchResults::new(results);
        let content = serde_json::to_string_pretty(&batch)?;
        std::fs::write(&output_path, content)?;
        println!("Results written to {}", output_path.display());
        output_batch(config.output_format, &batch.results)?;
    } else {
        output_batch(config.output_format, &results)?;
    }

    Ok(())
}

fn cmd_config(show: bool, set_output: Option<OutputFormat>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(format) = set_output {
        config.output_format = format;
        config.save()?;
        println!("Default output format set to {}", format);
    }

    if show {
        print!("{}", config);
    } else if set_output.is_none() {
        println!("Use --show to display configuration, --set-output to change it.");
    }

    Ok(())
}
