//! Normal contact strategy trait shared by the elliptical and
//! non-elliptical models.

use serde::{Deserialize, Serialize};

use railcontact_types::{ContactError, ContactResult};

use crate::patch::ContactPatch;

/// The prescribed normal load quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NormalLoad {
    /// Normal force (N).
    Force(f64),
    /// Penetration / approach of the bodies (m).
    Penetration(f64),
}

impl NormalLoad {
    /// Builds the load from two optional inputs, exactly one of which
    /// must be present.
    pub fn from_options(penetration: Option<f64>, normal_force: Option<f64>) -> ContactResult<Self> {
        let load = match (penetration, normal_force) {
            (Some(_), Some(_)) => {
                return Err(ContactError::InvalidLoad(
                    "supply either penetration or normal force, not both".into(),
                ))
            }
            (None, None) => {
                return Err(ContactError::InvalidLoad(
                    "one of penetration or normal force is required".into(),
                ))
            }
            (Some(delta), None) => Self::Penetration(delta),
            (None, Some(force)) => Self::Force(force),
        };
        load.validate()?;
        Ok(load)
    }

    /// Rejects non-positive or non-finite magnitudes.
    pub fn validate(&self) -> ContactResult<()> {
        let (label, value) = match *self {
            Self::Force(f) => ("normal force", f),
            Self::Penetration(d) => ("penetration", d),
        };
        if !(value.is_finite() && value > 0.0) {
            return Err(ContactError::InvalidLoad(format!(
                "{label} must be positive and finite, got {value}"
            )));
        }
        Ok(())
    }
}

/// How the complementary load quantity was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Closed-form expression, exact.
    ClosedForm,
    /// Numerical root-find met the tolerance.
    Converged { iterations: u64 },
    /// Root-find failed; the closed-form seed was returned instead.
    Fallback {
        iterations: u64,
        /// Relative penetration residual of the best trial force.
        residual: f64,
    },
}

impl SolveStatus {
    /// True when the result carries reduced confidence.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// A normal force recovered from a penetration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceEstimate {
    /// Normal force (N).
    pub normal_force: f64,
    /// Provenance of the value.
    pub status: SolveStatus,
}

/// Result of a normal contact solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalSolution {
    /// Penetration (m).
    pub penetration: f64,
    /// Normal force (N).
    pub normal_force: f64,
    /// Patch geometry and pressure.
    pub patch: ContactPatch,
    /// Provenance of the derived load quantity.
    pub status: SolveStatus,
}

/// Trait for normal contact models.
///
/// Implementations hold only immutable configuration, so one model may
/// serve concurrent solves.
///
/// # Implementations
///
/// - [`KikPiotrowski`](crate::kik_piotrowski::KikPiotrowski): elliptical, closed form
/// - [`ModifiedKikPiotrowski`](crate::modified::ModifiedKikPiotrowski): non-elliptical correction
pub trait NormalContactModel: Send + Sync {
    /// Patch geometry and pressure for a given normal force.
    fn contact_patch(
        &self,
        normal_force: f64,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<ContactPatch>;

    /// Penetration produced by a given normal force.
    fn penetration(
        &self,
        normal_force: f64,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<f64>;

    /// Normal force required for a given penetration.
    fn normal_force(
        &self,
        penetration: f64,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<ForceEstimate>;

    /// Returns the model name.
    fn name(&self) -> &str;

    /// Solves for the missing load quantity and the patch.
    fn solve(
        &self,
        load: NormalLoad,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<NormalSolution> {
        load.validate()?;
        let (penetration, normal_force, status) = match load {
            NormalLoad::Force(force) => (
                self.penetration(force, yaw_angle, lateral_displacement)?,
                force,
                SolveStatus::ClosedForm,
            ),
            NormalLoad::Penetration(delta) => {
                let estimate = self.normal_force(delta, yaw_angle, lateral_displacement)?;
                (delta, estimate.normal_force, estimate.status)
            }
        };

        let patch = self.contact_patch(normal_force, yaw_angle, lateral_displacement)?;
        tracing::debug!(
            model = self.name(),
            normal_force,
            penetration,
            a = patch.a,
            b = patch.b,
            "normal contact solved"
        );

        Ok(NormalSolution {
            penetration,
            normal_force,
            patch,
            status,
        })
    }

    /// Option-based entry point: exactly one of `penetration` and
    /// `normal_force` must be given.
    fn solve_contact_problem(
        &self,
        penetration: Option<f64>,
        normal_force: Option<f64>,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<NormalSolution> {
        let load = NormalLoad::from_options(penetration, normal_force)?;
        self.solve(load, yaw_angle, lateral_displacement)
    }
}
