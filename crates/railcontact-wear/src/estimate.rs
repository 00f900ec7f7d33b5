//! Wear estimates over a solved contact.

use serde::{Deserialize, Serialize};

use railcontact_math::DVec2;
use railcontact_normal::ContactPatch;
use railcontact_tangential::{TangentialSolution, TractionField};
use railcontact_types::ContactResult;

use crate::config::WearConfig;
use crate::traits::WearModel;
use crate::usfd::UsfdWear;

/// Pa to N/mm².
const PA_TO_N_PER_MM2: f64 = 1.0e-6;
/// m² to mm².
const M2_TO_MM2: f64 = 1.0e6;

/// Global Tγ (N/mm²): `|Fx ξ + Fy η| / A` with `A` in mm².
///
/// Zero for a vanishing area.
pub fn global_t_gamma(forces: DVec2, creepage: DVec2, area_mm2: f64) -> f64 {
    if area_mm2 <= 0.0 {
        return 0.0;
    }
    forces.dot(creepage).abs() / area_mm2
}

/// Local Tγ (N/mm²) `|τ·s|` at every masked point, row by row.
pub fn local_t_gamma(field: &TractionField) -> Vec<f64> {
    field
        .friction_power_density()
        .masked(field.grid.mask())
        .into_iter()
        .map(|density| density * PA_TO_N_PER_MM2)
        .collect()
}

/// Wear predicted for one contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WearEstimate {
    /// Mean local Tγ (N/mm²).
    pub mean_t_gamma: f64,
    /// Mean local wear rate (μg/(m·mm²)).
    pub mean_rate: f64,
    /// Mean local wear depth (mm).
    pub mean_depth: f64,
    /// Worn volume over the patch (mm³): mean local depth times area.
    pub volume: f64,
    /// Wear rate per masked point.
    pub local_rates: Vec<f64>,
    /// Wear depth per masked point (mm).
    pub local_depths: Vec<f64>,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Evaluates a [`WearModel`] over traction fields.
pub struct WearEstimator {
    model: Box<dyn WearModel>,
    density: f64,
    sliding_distance: f64,
}

impl std::fmt::Debug for WearEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WearEstimator")
            .field("model", &self.model.name())
            .field("density", &self.density)
            .field("sliding_distance", &self.sliding_distance)
            .finish()
    }
}

impl WearEstimator {
    pub fn new(model: Box<dyn WearModel>, density: f64, sliding_distance: f64) -> ContactResult<Self> {
        WearConfig {
            density,
            sliding_distance,
            ..Default::default()
        }
        .validate()?;
        Ok(Self {
            model,
            density,
            sliding_distance,
        })
    }

    /// USFD estimator for the materials named in `config`.
    pub fn from_config(config: &WearConfig) -> ContactResult<Self> {
        config.validate()?;
        let model = UsfdWear::new(&config.wheel_material, &config.rail_material);
        Self::new(Box::new(model), config.density, config.sliding_distance)
    }

    pub fn model(&self) -> &dyn WearModel {
        self.model.as_ref()
    }

    /// Wear from the local Tγ of a tangential solution.
    pub fn estimate(&self, patch: &ContactPatch, solution: &TangentialSolution) -> WearEstimate {
        let t_gamma = local_t_gamma(&solution.field);
        let local_rates: Vec<f64> = t_gamma.iter().map(|&t| self.model.wear_rate(t)).collect();
        let local_depths: Vec<f64> = t_gamma
            .iter()
            .map(|&t| self.model.wear_depth(t, self.sliding_distance, self.density))
            .collect();

        // Mean of the local depths, not the depth at the mean Tγ.
        let mean_depth = mean(&local_depths);

        let estimate = WearEstimate {
            mean_t_gamma: mean(&t_gamma),
            mean_rate: mean(&local_rates),
            mean_depth,
            volume: mean_depth * patch.area * M2_TO_MM2,
            local_rates,
            local_depths,
        };
        tracing::debug!(
            model = self.model.name(),
            t_gamma = estimate.mean_t_gamma,
            rate = estimate.mean_rate,
            volume = estimate.volume,
            "wear estimated"
        );
        estimate
    }

    /// Wear from the resultant forces and creepages only.
    pub fn estimate_global(&self, forces: DVec2, creepage: DVec2, area: f64) -> WearEstimate {
        let area_mm2 = area * M2_TO_MM2;
        let t_gamma = global_t_gamma(forces, creepage, area_mm2);
        let rate = self.model.wear_rate(t_gamma);
        let depth = self.model.wear_depth(t_gamma, self.sliding_distance, self.density);
        WearEstimate {
            mean_t_gamma: t_gamma,
            mean_rate: rate,
            mean_depth: depth,
            volume: self
                .model
                .wear_volume(t_gamma, self.sliding_distance, area_mm2, self.density),
            local_rates: Vec::new(),
            local_depths: Vec::new(),
        }
    }
}
