//! Domain model types

pub mod package;
pub mod stack;

pub use package::Package;
pub use stack::Stack;
