//! Normal solver configuration.

use serde::{Deserialize, Serialize};

use railcontact_types::constants::{
    DEFAULT_DISCRETIZATION, DEFAULT_MAX_ROOT_ITERATIONS, DEFAULT_ROOT_TOLERANCE,
    DEFAULT_SEMI_AXES_RATIO_LIMIT,
};
use railcontact_types::{ContactError, ContactResult};

/// Configuration shared by the normal contact strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalConfig {
    /// Grid points per direction for the sampled pressure field.
    pub discretization: usize,

    /// Semi-axes ratio above which the modified model applies its
    /// non-elliptical correction.
    pub semi_axes_ratio_limit: f64,

    /// Relative penetration residual accepted by the inverse solve.
    pub root_tolerance: f64,

    /// Iteration cap of the inverse solve.
    pub max_root_iterations: u64,
}

impl Default for NormalConfig {
    fn default() -> Self {
        Self {
            discretization: DEFAULT_DISCRETIZATION,
            semi_axes_ratio_limit: DEFAULT_SEMI_AXES_RATIO_LIMIT,
            root_tolerance: DEFAULT_ROOT_TOLERANCE,
            max_root_iterations: DEFAULT_MAX_ROOT_ITERATIONS,
        }
    }
}

impl NormalConfig {
    /// Coarse grid for quick looks.
    pub fn coarse() -> Self {
        Self {
            discretization: 20,
            ..Default::default()
        }
    }

    /// Fine grid and tight root tolerance.
    pub fn high_quality() -> Self {
        Self {
            discretization: 100,
            root_tolerance: 1.0e-9,
            max_root_iterations: 2000,
            ..Default::default()
        }
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> ContactResult<()> {
        if self.discretization < 2 {
            return Err(ContactError::InvalidConfig(format!(
                "discretization must be at least 2, got {}",
                self.discretization
            )));
        }
        if !(self.semi_axes_ratio_limit.is_finite() && self.semi_axes_ratio_limit >= 1.0) {
            return Err(ContactError::InvalidConfig(format!(
                "semi_axes_ratio_limit must be >= 1, got {}",
                self.semi_axes_ratio_limit
            )));
        }
        if !(self.root_tolerance > 0.0) {
            return Err(ContactError::InvalidConfig(
                "root_tolerance must be positive".into(),
            ));
        }
        Ok(())
    }
}
