//! Elastic properties of a single body.

use serde::{Deserialize, Serialize};

use railcontact_types::constants::{STEEL_DENSITY, STEEL_POISSON_RATIO, STEEL_YOUNGS_MODULUS};
use railcontact_types::{ContactError, ContactResult};

/// Isotropic linear-elastic properties of a wheel or rail material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticProperties {
    /// Grade name (e.g., "R8T").
    pub name: String,

    /// Young's modulus (Pa).
    pub youngs_modulus: f64,

    /// Poisson ratio, in (-1, 0.5).
    pub poisson_ratio: f64,

    /// Density (kg/m³). Used to convert wear mass to depth.
    pub density: f64,
}

impl ElasticProperties {
    /// Generic structural steel (210 GPa, ν = 0.3).
    pub fn steel(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            youngs_modulus: STEEL_YOUNGS_MODULUS,
            poisson_ratio: STEEL_POISSON_RATIO,
            density: STEEL_DENSITY,
        }
    }

    /// Shear modulus `G = E / (2(1 + ν))`.
    pub fn shear_modulus(&self) -> f64 {
        self.youngs_modulus / (2.0 * (1.0 + self.poisson_ratio))
    }

    /// Plane-strain compliance `(1 - ν²) / E`.
    pub fn compliance(&self) -> f64 {
        (1.0 - self.poisson_ratio * self.poisson_ratio) / self.youngs_modulus
    }

    /// Checks that the parameters describe a physical material.
    pub fn validate(&self) -> ContactResult<()> {
        if !(self.youngs_modulus.is_finite() && self.youngs_modulus > 0.0) {
            return Err(ContactError::InvalidMaterial(format!(
                "{}: Young's modulus must be positive, got {}",
                self.name, self.youngs_modulus
            )));
        }
        if !(self.poisson_ratio > -1.0 && self.poisson_ratio < 0.5) {
            return Err(ContactError::InvalidMaterial(format!(
                "{}: Poisson ratio must lie in (-1, 0.5), got {}",
                self.name, self.poisson_ratio
            )));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ContactError::InvalidMaterial(format!(
                "{}: density must be positive, got {}",
                self.name, self.density
            )));
        }
        Ok(())
    }
}
