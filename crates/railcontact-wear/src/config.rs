//! Wear estimation settings.

use serde::{Deserialize, Serialize};

use railcontact_types::constants::STEEL_DENSITY;
use railcontact_types::{ContactError, ContactResult};

use crate::usfd::{CALIBRATED_RAIL, CALIBRATED_WHEEL};

/// Settings of a wear estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WearConfig {
    /// Wheel grade, used to pick wear coefficients.
    pub wheel_material: String,
    /// Rail grade, used to pick wear coefficients.
    pub rail_material: String,
    /// Density of the worn body (kg/m³).
    pub density: f64,
    /// Rolled distance (m).
    pub sliding_distance: f64,
}

impl Default for WearConfig {
    fn default() -> Self {
        Self {
            wheel_material: CALIBRATED_WHEEL.into(),
            rail_material: CALIBRATED_RAIL.into(),
            density: STEEL_DENSITY,
            sliding_distance: 1000.0,
        }
    }
}

impl WearConfig {
    pub fn validate(&self) -> ContactResult<()> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ContactError::InvalidConfig(format!(
                "wear density must be positive, got {}",
                self.density
            )));
        }
        if !(self.sliding_distance.is_finite() && self.sliding_distance >= 0.0) {
            return Err(ContactError::InvalidConfig(format!(
                "sliding distance must be non-negative, got {}",
                self.sliding_distance
            )));
        }
        Ok(())
    }
}
