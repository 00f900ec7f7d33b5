//! Principal curvatures at the contact point.
//!
//! Curvature extraction from measured profiles lives outside this
//! crate; it plugs in through [`CurvatureProvider`].

use serde::{Deserialize, Serialize};

use railcontact_types::constants::YAW_EPSILON;
use railcontact_types::{ContactError, ContactResult};

/// Relative principal curvatures (1/m) in the rolling and lateral directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvaturePair {
    pub longitudinal: f64,
    pub lateral: f64,
}

impl CurvaturePair {
    /// Creates a pair, rejecting non-positive or non-finite curvatures.
    pub fn new(longitudinal: f64, lateral: f64) -> ContactResult<Self> {
        for (label, value) in [("longitudinal", longitudinal), ("lateral", lateral)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ContactError::InvalidGeometry(format!(
                    "{label} curvature must be positive, got {value}"
                )));
            }
        }
        Ok(Self {
            longitudinal,
            lateral,
        })
    }

    /// Curvature sum `κx + κy`.
    pub fn sum(&self) -> f64 {
        self.longitudinal + self.lateral
    }

    /// Ratio `κx / κy`; `b/a = sqrt(ratio)` for an elliptical patch.
    pub fn ratio(&self) -> f64 {
        self.longitudinal / self.lateral
    }

    /// Blends the curvatures for a yawed wheelset.
    ///
    /// `κx' = κx cos²ψ + κy sin²ψ`, `κy' = κy cos²ψ + κx sin²ψ`.
    /// Both use the un-yawed pair, so the sum is preserved.
    pub fn yawed(&self, yaw_angle: f64) -> Self {
        if yaw_angle.abs() <= YAW_EPSILON {
            return *self;
        }
        let c2 = yaw_angle.cos().powi(2);
        let s2 = yaw_angle.sin().powi(2);
        Self {
            longitudinal: self.longitudinal * c2 + self.lateral * s2,
            lateral: self.lateral * c2 + self.longitudinal * s2,
        }
    }
}

/// Source of principal curvatures for a wheel/rail configuration.
///
/// # Implementations
/// - [`CircularProfiles`]: wheel rolling radius and rail head radius
/// - [`FixedCurvatures`]: curvatures extracted elsewhere from profile data
pub trait CurvatureProvider: Send + Sync {
    /// Curvatures at the contact point for the given yaw angle (rad)
    /// and lateral wheelset displacement (m).
    fn curvatures(&self, yaw_angle: f64, lateral_displacement: f64) -> ContactResult<CurvaturePair>;

    /// Returns the provider name.
    fn name(&self) -> &str;
}

/// Circular wheel (rolling radius) on a circular rail head.
///
/// The lateral displacement does not change the radii of circular
/// profiles and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularProfiles {
    /// Wheel rolling radius (m).
    pub wheel_radius: f64,
    /// Rail head transverse radius (m).
    pub rail_radius: f64,
}

impl CircularProfiles {
    /// Creates the provider, rejecting non-positive radii.
    pub fn new(wheel_radius: f64, rail_radius: f64) -> ContactResult<Self> {
        CurvaturePair::new(1.0 / wheel_radius, 1.0 / rail_radius)?;
        Ok(Self {
            wheel_radius,
            rail_radius,
        })
    }
}

impl CurvatureProvider for CircularProfiles {
    fn curvatures(&self, yaw_angle: f64, _lateral_displacement: f64) -> ContactResult<CurvaturePair> {
        Ok(CurvaturePair::new(1.0 / self.wheel_radius, 1.0 / self.rail_radius)?.yawed(yaw_angle))
    }

    fn name(&self) -> &str {
        "circular_profiles"
    }
}

/// A curvature pair supplied by an external profile analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedCurvatures(pub CurvaturePair);

impl CurvatureProvider for FixedCurvatures {
    fn curvatures(&self, yaw_angle: f64, _lateral_displacement: f64) -> ContactResult<CurvaturePair> {
        Ok(self.0.yawed(yaw_angle))
    }

    fn name(&self) -> &str {
        "fixed_curvatures"
    }
}
