//! Tangential solver configuration.
//!
//! Material constants of the simplified theory and the discretisation
//! of the marching grid.

use serde::{Deserialize, Serialize};

use railcontact_material::MaterialPair;
use railcontact_types::constants::{
    DEFAULT_DISCRETIZATION, DEFAULT_FRICTION_COEFFICIENT, DEFAULT_NUM_STRIPS,
    DEFAULT_SHEAR_MODULUS, LINEAR_THEORY_THRESHOLD, STEEL_POISSON_RATIO,
};
use railcontact_types::{ContactError, ContactResult};

/// Configuration for the tangential solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TangentialConfig {
    /// Combined shear modulus G (Pa).
    pub shear_modulus: f64,

    /// Coulomb friction coefficient μ.
    pub friction_coefficient: f64,

    /// Poisson ratio. Recorded with the solution; the polynomial fit of
    /// Kalker's coefficients does not depend on it.
    pub poisson_ratio: f64,

    /// Grid points per direction.
    pub discretization: usize,

    /// Lateral strips used by FaStrip.
    pub num_strips: usize,

    /// Creepage magnitude below which FaStrip applies the linear-theory
    /// correction.
    pub linear_theory_threshold: f64,
}

impl Default for TangentialConfig {
    fn default() -> Self {
        Self {
            shear_modulus: DEFAULT_SHEAR_MODULUS,
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
            poisson_ratio: STEEL_POISSON_RATIO,
            discretization: DEFAULT_DISCRETIZATION,
            num_strips: DEFAULT_NUM_STRIPS,
            linear_theory_threshold: LINEAR_THEORY_THRESHOLD,
        }
    }
}

impl TangentialConfig {
    /// Coarse grid for quick sweeps.
    pub fn coarse() -> Self {
        Self {
            discretization: 20,
            num_strips: 10,
            ..Default::default()
        }
    }

    /// Fine grid and more strips.
    pub fn high_quality() -> Self {
        Self {
            discretization: 100,
            num_strips: 40,
            ..Default::default()
        }
    }

    /// Takes G and ν from a wheel/rail material pair.
    pub fn from_materials(materials: &MaterialPair, friction_coefficient: f64) -> Self {
        Self {
            shear_modulus: materials.combined_shear_modulus(),
            poisson_ratio: materials.mean_poisson_ratio(),
            friction_coefficient,
            ..Default::default()
        }
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> ContactResult<()> {
        if !(self.shear_modulus.is_finite() && self.shear_modulus > 0.0) {
            return Err(ContactError::InvalidConfig(format!(
                "shear_modulus must be positive, got {}",
                self.shear_modulus
            )));
        }
        if !(self.friction_coefficient.is_finite() && self.friction_coefficient >= 0.0) {
            return Err(ContactError::InvalidConfig(format!(
                "friction_coefficient must be non-negative, got {}",
                self.friction_coefficient
            )));
        }
        if !(self.poisson_ratio > -1.0 && self.poisson_ratio < 0.5) {
            return Err(ContactError::InvalidConfig(format!(
                "poisson_ratio must lie in (-1, 0.5), got {}",
                self.poisson_ratio
            )));
        }
        if self.discretization < 2 {
            return Err(ContactError::InvalidConfig(format!(
                "discretization must be at least 2, got {}",
                self.discretization
            )));
        }
        if self.num_strips == 0 {
            return Err(ContactError::InvalidConfig(
                "num_strips must be at least 1".into(),
            ));
        }
        if !(self.linear_theory_threshold >= 0.0) {
            return Err(ContactError::InvalidConfig(
                "linear_theory_threshold must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
