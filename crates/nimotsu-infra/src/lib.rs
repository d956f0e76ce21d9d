//! Infrastructure layer - batch input loaders

pub mod package_csv;
