//! Destination stack type definitions

use serde::{Deserialize, Serialize};

/// Destination stack for a sorted package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stack {
    /// Neither bulky nor heavy
    Standard,
    /// Bulky or heavy, but not both
    Special,
    /// Both bulky and heavy
    Rejected,
}

impl Stack {
    /// Determine stack from the bulky/heavy flags
    pub fn from_flags(is_bulky: bool, is_heavy: bool) -> Self {
        match (is_bulky, is_heavy) {
            (true, true) => Stack::Rejected,
            (false, false) => Stack::Standard,
            _ => Stack::Special,
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            Stack::Standard => "STANDARD",
            Stack::Special => "SPECIAL",
            Stack::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
