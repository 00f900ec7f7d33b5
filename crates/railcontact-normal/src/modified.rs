//! Modified Kik–Piotrowski model for strongly non-elliptical patches.
//!
//! Below the semi-axes ratio limit the model is the elliptical one.
//! Above it the larger semi-axis is shrunk, the pressure peak raised
//! and flattened, and the penetration grows with the excess ratio.
//! The force-from-penetration inverse has no closed form and is found
//! with a Nelder–Mead search seeded by the elliptical inverse.

use std::f64::consts::PI;

use railcontact_material::MaterialPair;
use railcontact_math::ScalarMinimizer;
use railcontact_types::ContactResult;

use crate::config::NormalConfig;
use crate::curvature::{CurvaturePair, CurvatureProvider};
use crate::kik_piotrowski::{self, KikPiotrowski};
use crate::patch::{ContactPatch, Ellipticity, PatchShape};
use crate::strategy::{ForceEstimate, NormalContactModel, SolveStatus};

/// Patch geometry after the non-elliptical correction.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CorrectedEllipse {
    shape: PatchShape,
    ratio: f64,
    non_elliptical: bool,
}

/// Non-elliptical normal contact model.
#[derive(Debug)]
pub struct ModifiedKikPiotrowski {
    base: KikPiotrowski,
    minimizer: ScalarMinimizer,
}

impl ModifiedKikPiotrowski {
    /// Creates the model from a curvature source and a material pair.
    pub fn new(
        curvature: Box<dyn CurvatureProvider>,
        materials: &MaterialPair,
        config: NormalConfig,
    ) -> ContactResult<Self> {
        let minimizer = ScalarMinimizer::with_max_iterations(config.max_root_iterations);
        let base = KikPiotrowski::new(curvature, materials, config)?;
        Ok(Self { base, minimizer })
    }

    pub fn config(&self) -> &NormalConfig {
        self.base.config()
    }

    /// The elliptical model used below the ratio limit.
    pub fn base(&self) -> &KikPiotrowski {
        &self.base
    }

    fn limit(&self) -> f64 {
        self.base.config().semi_axes_ratio_limit
    }

    fn corrected(&self, normal_force: f64, curvatures: &CurvaturePair) -> CorrectedEllipse {
        let (a, b) = kik_piotrowski::elliptical_semi_axes(
            normal_force,
            self.base.equivalent_modulus(),
            curvatures,
        );
        let ratio = semi_axes_ratio(a, b);
        let limit = self.limit();
        if ratio <= limit {
            return CorrectedEllipse {
                shape: PatchShape::elliptical(a, b),
                ratio,
                non_elliptical: false,
            };
        }

        let excess = ratio - limit;
        let c = 1.0 - 0.25 * (1.0 - limit / ratio);
        let (a, b) = if a >= b {
            (a * c.sqrt(), b)
        } else {
            (a, b * c.sqrt())
        };
        CorrectedEllipse {
            shape: PatchShape {
                a,
                b,
                area: PI * a * b * c,
                peak_factor: 1.5 * (1.0 + 0.1 * excess),
                exponent: 0.5 + 0.1 * excess,
            },
            ratio,
            non_elliptical: true,
        }
    }

    /// Penetration of the corrected patch.
    ///
    /// `δ = a_c²(κx+κy)/3 · (1 + 0.15(g - limit))` with `a_c` the
    /// corrected rolling semi-axis; equal to the elliptical value at
    /// the limit.
    fn corrected_penetration(&self, normal_force: f64, curvatures: &CurvaturePair) -> f64 {
        let ellipse = self.corrected(normal_force, curvatures);
        let delta = kik_piotrowski::penetration_from_rolling_axis(ellipse.shape.a, curvatures);
        if ellipse.non_elliptical {
            delta * (1.0 + 0.15 * (ellipse.ratio - self.limit()))
        } else {
            delta
        }
    }
}

fn semi_axes_ratio(a: f64, b: f64) -> f64 {
    if a <= 0.0 || b <= 0.0 {
        return 1.0;
    }
    (a / b).max(b / a)
}

impl NormalContactModel for ModifiedKikPiotrowski {
    fn contact_patch(
        &self,
        normal_force: f64,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<ContactPatch> {
        // Validates the load and the curvatures.
        self.base.semi_axes(normal_force, yaw_angle, lateral_displacement)?;
        let curvatures = self.base.curvatures(yaw_angle, lateral_displacement)?;
        let ellipse = self.corrected(normal_force, &curvatures);
        Ok(ContactPatch::new(
            ellipse.shape,
            normal_force,
            self.config().discretization,
            Some(Ellipticity {
                non_elliptical: ellipse.non_elliptical,
                semi_axes_ratio: ellipse.ratio,
            }),
        ))
    }

    fn penetration(
        &self,
        normal_force: f64,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<f64> {
        let base = self.base.penetration(normal_force, yaw_angle, lateral_displacement)?;
        let curvatures = self.base.curvatures(yaw_angle, lateral_displacement)?;
        if !self.corrected(normal_force, &curvatures).non_elliptical {
            return Ok(base);
        }
        Ok(self.corrected_penetration(normal_force, &curvatures))
    }

    fn normal_force(
        &self,
        penetration: f64,
        yaw_angle: f64,
        lateral_displacement: f64,
    ) -> ContactResult<ForceEstimate> {
        let seed = self.base.normal_force(penetration, yaw_angle, lateral_displacement)?;
        let curvatures = self.base.curvatures(yaw_angle, lateral_displacement)?;
        if !self.corrected(seed.normal_force, &curvatures).non_elliptical {
            return Ok(seed);
        }

        // Search over the force scaled by the seed so the simplex works
        // on values of order one.
        let force_scale = seed.normal_force;
        let residual = |scale: f64| -> f64 {
            if !(scale > 0.0) {
                return f64::INFINITY;
            }
            let delta = self.corrected_penetration(force_scale * scale, &curvatures);
            ((delta - penetration) / penetration).powi(2)
        };

        let tolerance = self.config().root_tolerance;
        let (iterations, relative_residual, accepted) = match self.minimizer.minimize(residual, 1.0) {
            Ok(minimum) => {
                let relative = minimum.cost.sqrt();
                let accepted = (minimum.converged && relative < tolerance)
                    .then_some(force_scale * minimum.argument);
                (minimum.iterations, relative, accepted)
            }
            Err(err) => {
                tracing::warn!(error = %err, "penetration inverse aborted");
                (0, residual(1.0).sqrt(), None)
            }
        };

        match accepted {
            Some(normal_force) => {
                tracing::debug!(iterations, residual = relative_residual, "penetration inverse converged");
                Ok(ForceEstimate {
                    normal_force,
                    status: SolveStatus::Converged { iterations },
                })
            }
            None => {
                tracing::warn!(
                    penetration,
                    iterations,
                    residual = relative_residual,
                    seed = force_scale,
                    "penetration inverse did not converge, returning elliptical estimate"
                );
                Ok(ForceEstimate {
                    normal_force: force_scale,
                    status: SolveStatus::Fallback {
                        iterations,
                        residual: relative_residual,
                    },
                })
            }
        }
    }

    fn name(&self) -> &str {
        "modified_kik_piotrowski"
    }
}
