//! Output formatting module

use chrono::{DateTime, Utc};
use nimotsu_domain::service::{generate_sort_report, SortCheckResult};
use nimotsu_types::{OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Batch results as written to the JSON output file
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResults {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<SortCheckResult>,
}

impl BatchResults {
    pub fn new(results: Vec<SortCheckResult>) -> Self {
        Self {
            generated_at: Utc::now(),
            results,
        }
    }
}

pub fn output_result(output_format: OutputFormat, result: &SortCheckResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nSort Result");
        println!("===========");
        if let Some(ref label) = result.package.label {
            println!("Label:           {}", label);
        }
        println!(
            "Dimensions:      {} x {} x {} cm",
            result.package.width_cm, result.package.height_cm, result.package.length_cm
        );
        println!("Mass:            {} kg", result.package.mass_kg);
        println!("Volume:          {:.0} cm³", result.volume_cm3);
        println!(
            "Bulky:           {}",
            if result.is_bulky { "Yes" } else { "No" }
        );
        println!(
            "Heavy:           {}",
            if result.is_heavy { "Yes" } else { "No" }
        );
        println!("\nDestination:     {}", result.stack);
    }

    Ok(())
}

pub fn output_batch(output_format: OutputFormat, results: &[SortCheckResult]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(results)?;
        println!("{}", content);
    } else {
        print!("{}", generate_sort_report(results));
    }

    Ok(())
}
