//! Closed-form elliptical normal contact (Kik–Piotrowski).
//!
//! The patch is the ellipse whose semi-axes satisfy
//! `a³ = 3F / (4E*(κx+κy))` and `b/a = sqrt(κx/κy)`; penetration and
//! force are exact algebraic inverses of each other.

use railcontact_material::MaterialPair;
use railcontact_types::constants::EPSILON;
use railcontact_types::{ContactError, ContactResult};

use crate::config::NormalConfig;
use crate::curvature::{CurvaturePair, CurvatureProvider};
use crate::patch::{ContactPatch, PatchShape};
use crate::strategy::{ForceEstimate, NormalContactModel, SolveStatus};

/// Rolling semi-axis `a` for a normal force.
pub(crate) fn rolling_semi_axis(normal_force: f64, equivalent_modulus: f64, curvatures: &CurvaturePair) -> f64 {
    let stiffness = (4.0 * equivalent_modulus * curvatures.sum()).max(EPSILON);
    (3.0 * normal_force / stiffness).cbrt()
}

/// Elliptical semi-axes `(a, b)` for a normal force.
pub(crate) fn elliptical_semi_axes(
    normal_force: f64,
    equivalent_modulus: f64,
    curvatures: &CurvaturePair,
) -> (f64, f64) {
    let a = rolling_semi_axis(normal_force, equivalent_modulus, curvatures);
    (a, a * curvatures.ratio().sqrt())
}

/// Penetration `δ = a²(κx+κy)/3`.
pub(crate) fn penetration_from_rolling_axis(a: f64, curvatures: &CurvaturePair) -> f64 {
    a * a * curvatures.sum() / 3.0
}

/// Exact inverse: `a = sqrt(3δ/κ)`, `F = 4E*κa³/3`.
pub(crate) fn force_from_penetration(penetration: f64, equivalent_modulus: f64, curvatures: &CurvaturePair) -> f64 {
    let kappa = curvatures.sum().max(EPSILON);
    let a = (3.0 * penetration / kappa).sqrt();
    4.0 * equivalent_modulus * kappa * a.powi(3) / 3.0
}

fn check_positive(label: &str, value: f64) -> ContactResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ContactError::InvalidLoad(format!(
            "{label} must be positive and finite, got {value}"
        )))
    }
}

/// Elliptical normal contact model.
///
/// Holds the curvature provider, the equivalent modulus computed once
/// from the material pair, and the grid resolution of the pressure
/// field.
pub struct KikPiotrowski {
    curvature: Box<dyn CurvatureProvider>,
    equivalent_modulus: f64,
    config: NormalConfig,
}

impl std::fmt::Debug for KikPiotrowski {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KikPiotrowski")
            .field("curvature", &self.curvature.name())
            .field("equivalent_modulus", &self.equivalent_modulus)
            .field("config", &self.config)
            .finish()
    }
}

impl KikPiotrowski {
    /// Creates the model from a curvature source and a material pair.
    pub fn new(
        curvature: Box<dyn CurvatureProvider>,
        materials: &MaterialPair,
        config: NormalConfig,
    ) -> ContactResult<Self> {
        config.validate()?;
        let equivalent_modulus = materials.equivalent_modulus();
        if !(equivalent_modulus.is_finite() && equivalent_modulus > 0.0) {
            return Err(ContactError::InvalidMaterial(format!(
                "equivalent modulus must be positive, got {equivalent_modulus}"
            )));
        }
        Ok(Self {
            curvature,
            equivalent_modulus,
            config,
        })
    }

    /// Equivalent modulus `E*` (Pa).
    pub fn equivalent_modulus(&self) -> f64 {
        self.equivalent_modulus
    }

    pub fn config(&self) -> &NormalConfig {
        &self.config
    }

    /// Curvatures for the given kinematic state, yaw blend applied.
    pub fn curvatures(&self, yaw_angle: f64, lateral_displacement: f64) -> ContactResult<CurvaturePair> {
        self.curvature.curvatures(yaw_angle, lateral_displacement)
    }

    /// Elliptical semi-axes `(a, b)` for a normal force.
    pub fn semi_axes(
        &self,
        normal_force: f64,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<(f64, f64)> {
        check_positive("normal force", normal_force)?;
        let curvatures = self.curvatures(yaw_angle, lateral_displacement)?;
        Ok(elliptical_semi_axes(normal_force, self.equivalent_modulus, &curvatures))
    }
}

impl NormalContactModel for KikPiotrowski {
    fn contact_patch(
        &self,
        normal_force: f64,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<ContactPatch> {
        let (a, b) = self.semi_axes(normal_force, yaw_angle, lateral_displacement)?;
        Ok(ContactPatch::new(
            PatchShape::elliptical(a, b),
            normal_force,
            self.config.discretization,
            None,
        ))
    }

    fn penetration(
        &self,
        normal_force: f64,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<f64> {
        check_positive("normal force", normal_force)?;
        let curvatures = self.curvatures(yaw_angle, lateral_displacement)?;
        let a = rolling_semi_axis(normal_force, self.equivalent_modulus, &curvatures);
        Ok(penetration_from_rolling_axis(a, &curvatures))
    }

    fn normal_force(
        &self,
        penetration: f64,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<ForceEstimate> {
        check_positive("penetration", penetration)?;
        let curvatures = self.curvatures(yaw_angle, lateral_displacement)?;
        Ok(ForceEstimate {
            normal_force: force_from_penetration(penetration, self.equivalent_modulus, &curvatures),
            status: SolveStatus::ClosedForm,
        })
    }

    fn name(&self) -> &str {
        "kik_piotrowski"
    }
}
