//! Package sorting service

use serde::{Deserialize, Serialize};

use crate::model::{Package, Stack};

/// Volume threshold for bulky packages (cm³, inclusive)
pub const BULKY_VOLUME_CM3: f64 = 1_000_000.0;
/// Single-edge threshold for bulky packages (cm, inclusive)
pub const BULKY_EDGE_CM: f64 = 150.0;
/// Mass threshold for heavy packages (kg, inclusive)
pub const HEAVY_MASS_KG: f64 = 20.0;

/// A package is bulky if its volume reaches 1,000,000 cm³ or any edge reaches 150 cm
pub fn is_bulky(package: &Package) -> bool {
    package.volume_cm3() >= BULKY_VOLUME_CM3 || package.longest_edge_cm() >= BULKY_EDGE_CM
}

/// A package is heavy if its mass reaches 20 kg
pub fn is_heavy(package: &Package) -> bool {
    package.mass_kg >= HEAVY_MASS_KG
}

/// Determine the destination stack for a single package
pub fn sort_package(package: &Package) -> Stack {
    Stack::from_flags(is_bulky(package), is_heavy(package))
}

/// Result of a sort check for a single package
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortCheckResult {
    pub package: Package,
    pub stack: Stack,
    pub is_bulky: bool,
    pub is_heavy: bool,
    pub volume_cm3: f64,
}

pub fn sort_packages(packages: &[Package]) -> Vec<SortCheckResult> {
    packages
        .iter()
        .map(|package| {
            let bulky = is_bulky(package);
            let heavy = is_heavy(package);
            SortCheckResult {
                package: package.clone(),
                stack: Stack::from_flags(bulky, heavy),
                is_bulky: bulky,
                is_heavy: heavy,
                volume_cm3: package.volume_cm3(),
            }
        })
        .collect()
}

pub fn generate_sort_report(results: &[SortCheckResult]) -> String {
    let total = results.len();
    let standard_count = results.iter().filter(|r| r.stack == Stack::Standard).count();
    let special_count = results.iter().filter(|r| r.stack == Stack::Special).count();
    let rejected_count = results.iter().filter(|r| r.stack == Stack::Rejected).count();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("              Package Sort Report                 \n");
    report.push_str("==================================================\n\n");
    report.push_str("Summary\n");
    report.push_str(&format!("  Total packages:   {}\n", total));
    report.push_str(&format!("  STANDARD:         {}\n", standard_count));
    report.push_str(&format!("  SPECIAL:          {}\n", special_count));
    report.push_str(&format!("  REJECTED:         {}\n", rejected_count));
    if total > 0 {
        let rejected_rate = (rejected_count as f64 / total as f64) * 100.0;
        report.push_str(&format!("  Rejection rate:   {:.1}%\n", rejected_rate));
    }
    report.push('\n');

    let flagged_count = special_count + rejected_count;
    if flagged_count > 0 {
        report.push_str("Flagged Packages (SPECIAL / REJECTED)\n");
        report.push_str("-".repeat(70).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:>8} {:>8} {:>8} {:>8} {:>10} {:>9}\n",
            "Label", "W(cm)", "H(cm)", "L(cm)", "M(kg)", "Vol(cm³)", "Stack"
        ));
        report.push_str("-".repeat(70).as_str());
        report.push('\n');
        for result in results.iter().filter(|r| r.stack != Stack::Standard) {
            report.push_str(&format!(
                "{:<12} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>10.0} {:>9}\n",
                truncate_str(result.package.label.as_deref().unwrap_or("-"), 11),
                result.package.width_cm,
                result.package.height_cm,
                result.package.length_cm,
                result.package.mass_kg,
                result.volume_cm3,
                result.stack.label()
            ));
        }
        report.push('\n');
    } else {
        report.push_str("No Flagged Packages\n");
        report.push_str("  All packages go to the STANDARD stack.\n\n");
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(w: f64, h: f64, l: f64, m: f64) -> Package {
        Package::new(w, h, l, m)
    }

    #[test]
    fn test_standard_small_light() {
        assert_eq!(sort_package(&pkg(10.0, 10.0, 10.0, 5.0)), Stack::Standard);
    }

    #[test]
    fn test_special_bulky_by_volume() {
        // 100^3 = 1,000,000, exactly the bulky limit
        assert_eq!(sort_package(&pkg(100.0, 100.0, 100.0, 5.0)), Stack::Special);
    }

    #[test]
    fn test_special_bulky_by_edge() {
        assert_eq!(sort_package(&pkg(160.0, 10.0, 10.0, 5.0)), Stack::Special);
    }

    #[test]
    fn test_special_heavy_only() {
        assert_eq!(sort_package(&pkg(10.0, 10.0, 10.0, 25.0)), Stack::Special);
    }

    #[test]
    fn test_rejected_heavy_and_bulky_by_volume() {
        assert_eq!(sort_package(&pkg(100.0, 100.0, 100.0, 30.0)), Stack::Rejected);
    }

    #[test]
    fn test_rejected_heavy_and_bulky_by_edge() {
        assert_eq!(sort_package(&pkg(160.0, 50.0, 50.0, 30.0)), Stack::Rejected);
    }

    #[test]
    fn test_rejected_exactly_at_both_limits() {
        assert_eq!(sort_package(&pkg(100.0, 100.0, 100.0, 20.0)), Stack::Rejected);
    }

    #[test]
    fn test_standard_just_under_heavy_limit() {
        assert_eq!(sort_package(&pkg(1.0, 1.0, 1.0, 19.999)), Stack::Standard);
    }

    #[test]
    fn test_standard_volume_just_under_limit() {
        // 99^3 = 970,299 < 1,000,000
        assert_eq!(sort_package(&pkg(99.0, 99.0, 99.0, 10.0)), Stack::Standard);
        assert!(!is_bulky(&pkg(99.9, 100.0, 100.1, 10.0)));
    }

    #[test]
    fn test_standard_edge_just_under_limit() {
        assert_eq!(sort_package(&pkg(149.9, 1.0, 1.0, 10.0)), Stack::Standard);
    }

    #[test]
    fn test_special_edge_exactly_at_limit() {
        assert_eq!(sort_package(&pkg(150.0, 1.0, 1.0, 1.0)), Stack::Special);
    }

    #[test]
    fn test_heavy_exactly_at_limit() {
        assert!(is_heavy(&pkg(1.0, 1.0, 1.0, 20.0)));
        assert!(!is_heavy(&pkg(1.0, 1.0, 1.0, 19.999)));
    }

    #[test]
    fn test_bulky_checks_every_edge() {
        assert!(is_bulky(&pkg(150.0, 1.0, 1.0, 1.0)));
        assert!(is_bulky(&pkg(1.0, 150.0, 1.0, 1.0)));
        assert!(is_bulky(&pkg(1.0, 1.0, 150.0, 1.0)));
    }

    #[test]
    fn test_growing_inputs_never_relax_the_stack() {
        fn rank(stack: Stack) -> u8 {
            match stack {
                Stack::Standard => 0,
                Stack::Special => 1,
                Stack::Rejected => 2,
            }
        }

        let base = pkg(140.0, 90.0, 70.0, 18.0);
        let base_rank = rank(sort_package(&base));
        for scale in [1.0, 1.1, 1.5, 2.0, 5.0] {
            let grown = pkg(
                base.width_cm * scale,
                base.height_cm * scale,
                base.length_cm * scale,
                base.mass_kg * scale,
            );
            assert!(rank(sort_package(&grown)) >= base_rank);
        }
        let heavier = pkg(base.width_cm, base.height_cm, base.length_cm, 25.0);
        assert!(rank(sort_package(&heavier)) >= base_rank);
    }

    #[test]
    fn test_sort_packages_batch() {
        let packages = vec![
            pkg(10.0, 10.0, 10.0, 5.0),
            pkg(160.0, 10.0, 10.0, 5.0),
            pkg(100.0, 100.0, 100.0, 30.0),
        ];
        let results = sort_packages(&packages);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].stack, Stack::Standard);
        assert!(!results[0].is_bulky);
        assert_eq!(results[1].stack, Stack::Special);
        assert!(results[1].is_bulky);
        assert!(!results[1].is_heavy);
        assert_eq!(results[2].stack, Stack::Rejected);
        assert!(results[2].is_bulky);
        assert!(results[2].is_heavy);
        assert!((results[2].volume_cm3 - 1_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_generate_report() {
        let packages = vec![
            pkg(10.0, 10.0, 10.0, 5.0).with_label("PKG-001".to_string()),
            pkg(160.0, 10.0, 10.0, 5.0).with_label("PKG-002".to_string()),
            pkg(100.0, 100.0, 100.0, 30.0).with_label("PKG-003".to_string()),
        ];
        let results = sort_packages(&packages);
        let report = generate_sort_report(&results);
        assert!(report.contains("Package Sort Report"));
        assert!(report.contains("Total packages:   3"));
        assert!(report.contains("STANDARD:         1"));
        assert!(report.contains("REJECTED:         1"));
        assert!(report.contains("PKG-002"));
        assert!(report.contains("PKG-003"));
        assert!(!report.contains("PKG-001"));
    }

    #[test]
    fn test_report_with_no_flagged_packages() {
        let results = sort_packages(&[pkg(10.0, 10.0, 10.0, 5.0)]);
        let report = generate_sort_report(&results);
        assert!(report.contains("No Flagged Packages"));
    }
}
