//! Tangential contact strategy trait and its result type.

use serde::{Deserialize, Serialize};

use railcontact_math::DVec2;
use railcontact_normal::ContactPatch;
use railcontact_types::ContactResult;

use crate::coefficients::Flexibility;
use crate::creepage::Creepage;
use crate::field::TractionField;

/// Low-creepage correction towards Kalker's linear theory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearCorrection {
    /// Forces from the marching sweep before correction (N).
    pub uncorrected: DVec2,
    /// Linear-theory forces (N).
    pub linear: DVec2,
    /// Per-axis factors applied to the forces, each in `[0.8, 1.2]`.
    pub factors: DVec2,
}

/// Result of a tangential solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TangentialSolution {
    /// Tangential force `(Fx, Fy)` (N).
    pub forces: DVec2,
    /// Spin moment (N·m).
    pub moment: f64,
    /// Adhering fraction of the patch, in `[0, 1]`.
    pub adhesion_area: f64,
    /// `|F| / (μN)`; `0.0` when μN vanishes.
    pub utilisation: f64,
    /// Flexibility parameters used by the sweep.
    pub flexibility: Flexibility,
    /// Point-wise traction state.
    pub field: TractionField,
    /// Present when the low-creepage correction was applied.
    pub linear_correction: Option<LinearCorrection>,
}

impl TangentialSolution {
    /// Magnitude of the tangential force (N).
    pub fn force_magnitude(&self) -> f64 {
        self.forces.length()
    }

    /// Sliding fraction `1 - adhesion_area`.
    pub fn slip_area(&self) -> f64 {
        1.0 - self.adhesion_area
    }
}

/// Trait for tangential (creep-force) solvers.
///
/// # Implementations
///
/// - [`FastSim`](crate::fastsim::FastSim): full-ellipse flexibility
/// - [`FaStrip`](crate::fastrip::FaStrip): strip flexibility with a
///   low-creepage linear-theory correction
pub trait TangentialContactModel: Send + Sync {
    /// Solves for the traction field and resultants.
    ///
    /// `normal_force` only scales the reported utilisation; the traction
    /// bound comes from the patch pressure.
    fn solve(
        &self,
        patch: &ContactPatch,
        creepage: &Creepage,
        normal_force: f64,
    ) -> ContactResult<TangentialSolution>;

    /// Returns the solver name.
    fn name(&self) -> &str;
}
