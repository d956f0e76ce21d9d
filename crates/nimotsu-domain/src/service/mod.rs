//! Domain services

pub mod sorter;

pub use sorter::{
    generate_sort_report, is_bulky, is_heavy, sort_package, sort_packages, SortCheckResult,
    BULKY_EDGE_CM, BULKY_VOLUME_CM3, HEAVY_MASS_KG,
};
