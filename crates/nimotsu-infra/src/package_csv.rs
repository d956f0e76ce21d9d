//! CSV loader for batch package sorting (simple format)

use nimotsu_domain::model::Package;

/// Load packages from a simple CSV file
///
/// Expected columns (header row optional):
/// label, width_cm, height_cm, length_cm, mass_kg
///
/// Blank lines and malformed rows are skipped, as are rows with
/// non-positive or non-finite measurements.
pub fn load_packages_from_csv(path: &std::path::Path) -> Result<Vec<Package>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read CSV file: {}", e))?;
    let mut packages = Vec::new();
    let mut lines = content.lines();
    let first_line = lines.next().ok_or("CSV file is empty")?;
    let headers: Vec<&str> = first_line.split(',').map(|s| s.trim()).collect();
    let is_header = headers.iter().any(|h| {
        h.to_lowercase().contains("label")
            || h.to_lowercase().contains("width")
            || h.to_lowercase().contains("height")
            || h.to_lowercase().contains("length")
            || h.to_lowercase().contains("mass")
    });
    if !is_header {
        if let Some(package) = parse_csv_line(first_line) {
            packages.push(package);
        }
    }
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(package) = parse_csv_line(line) {
            packages.push(package);
        }
    }
    Ok(packages)
}

fn parse_csv_line(line: &str) -> Option<Package> {
    let fields: Vec<&str> = line.split(',').map(|s| s.trim()).collect();
    if fields.len() < 5 {
        return None;
    }
    let label = fields.first()?.to_string();
    let width_cm: f64 = fields.get(1)?.parse().ok()?;
    let height_cm: f64 = fields.get(2)?.parse().ok()?;
    let length_cm: f64 = fields.get(3)?.parse().ok()?;
    let mass_kg: f64 = fields.get(4)?.parse().ok()?;

    let package = Package {
        label: if label.is_empty() { None } else { Some(label) },
        width_cm,
        height_cm,
        length_cm,
        mass_kg,
    };
    if !package.is_measurable() {
        return None;
    }
    Some(package)
}
