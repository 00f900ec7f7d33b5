//! University of Sheffield (USFD) T-gamma wear function.
//!
//! Three regimes, separated by the transitions `T1` and `T2`:
//! mild `K1·Tγ`, severe `K2` (constant), catastrophic `K3·Tγ - C3`.

use serde::{Deserialize, Serialize};

use crate::traits::WearModel;

/// Wheel grade with measured coefficients.
pub const CALIBRATED_WHEEL: &str = "R8T";
/// Rail grade with measured coefficients.
pub const CALIBRATED_RAIL: &str = "UIC60_900A";

/// Piecewise wear-function coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsfdCoefficients {
    /// Mild slope (μg/(m·mm²) per N/mm²).
    pub k1: f64,
    /// Mild/severe transition (N/mm²).
    pub t1: f64,
    /// Severe rate (μg/(m·mm²)).
    pub k2: f64,
    /// Severe/catastrophic transition (N/mm²).
    pub t2: f64,
    /// Catastrophic slope.
    pub k3: f64,
    /// Catastrophic offset.
    pub c3: f64,
}

impl Default for UsfdCoefficients {
    /// R8T wheel on UIC60 900A rail.
    fn default() -> Self {
        Self {
            k1: 5.3,
            t1: 10.4,
            k2: 55.0,
            t2: 77.2,
            k3: 61.9,
            c3: 4778.7,
        }
    }
}

/// Wear regime of a Tγ value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WearRegime {
    Mild,
    Severe,
    Catastrophic,
}

/// The USFD wear model for a wheel/rail material pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsfdWear {
    pub wheel_material: String,
    pub rail_material: String,
    pub coefficients: UsfdCoefficients,
}

fn normalise(name: &str) -> String {
    name.trim().replace(' ', "_").to_ascii_uppercase()
}

impl UsfdWear {
    /// Model for a material pair.
    ///
    /// Only R8T on UIC60 900A is calibrated; other pairs reuse its
    /// coefficients and log a warning.
    pub fn new(wheel_material: impl Into<String>, rail_material: impl Into<String>) -> Self {
        let wheel_material = wheel_material.into();
        let rail_material = rail_material.into();
        if !Self::is_calibrated(&wheel_material, &rail_material) {
            tracing::warn!(
                wheel = %wheel_material,
                rail = %rail_material,
                "no wear coefficients for this material pair, using R8T/UIC60 900A values"
            );
        }
        Self {
            wheel_material,
            rail_material,
            coefficients: UsfdCoefficients::default(),
        }
    }

    /// Model with explicit coefficients.
    pub fn with_coefficients(
        wheel_material: impl Into<String>,
        rail_material: impl Into<String>,
        coefficients: UsfdCoefficients,
    ) -> Self {
        Self {
            wheel_material: wheel_material.into(),
            rail_material: rail_material.into(),
            coefficients,
        }
    }

    /// Whether measured coefficients exist for the pair.
    pub fn is_calibrated(wheel_material: &str, rail_material: &str) -> bool {
        normalise(wheel_material) == CALIBRATED_WHEEL && normalise(rail_material) == CALIBRATED_RAIL
    }

    pub fn regime(&self, t_gamma: f64) -> WearRegime {
        let c = &self.coefficients;
        if t_gamma < c.t1 {
            WearRegime::Mild
        } else if t_gamma <= c.t2 {
            WearRegime::Severe
        } else {
            WearRegime::Catastrophic
        }
    }
}

impl Default for UsfdWear {
    fn default() -> Self {
        Self::with_coefficients(CALIBRATED_WHEEL, CALIBRATED_RAIL, UsfdCoefficients::default())
    }
}

impl WearModel for UsfdWear {
    /// Wear rate in μg/(m·mm²); never negative.
    fn wear_rate(&self, t_gamma: f64) -> f64 {
        let c = &self.coefficients;
        let rate = match self.regime(t_gamma) {
            WearRegime::Mild => c.k1 * t_gamma,
            WearRegime::Severe => c.k2,
            WearRegime::Catastrophic => c.k3 * t_gamma - c.c3,
        };
        rate.max(0.0)
    }

    fn name(&self) -> &str {
        "usfd"
    }
}
