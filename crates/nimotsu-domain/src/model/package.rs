use serde::{Deserialize, Serialize};

/// A physical package as measured at the sorting station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Package label / tracking number (optional, set for batch input)
    #[serde(default)]
    pub label: Option<String>,
    /// Width in centimeters
    pub width_cm: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Length in centimeters
    pub length_cm: f64,
    /// Mass in kilograms
    pub mass_kg: f64,
}

impl Package {
    pub fn new(width_cm: f64, height_cm: f64, length_cm: f64, mass_kg: f64) -> Self {
        Self {
            label: None,
            width_cm,
            height_cm,
            length_cm,
            mass_kg,
        }
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = Some(label);
        self
    }

    pub fn volume_cm3(&self) -> f64 {
        self.width_cm * self.height_cm * self.length_cm
    }

    pub fn longest_edge_cm(&self) -> f64 {
        self.width_cm.max(self.height_cm).max(self.length_cm)
    }

    /// All measurements positive and finite
    pub fn is_measurable(&self) -> bool {
        [self.width_cm, self.height_cm, self.length_cm, self.mass_kg]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}
