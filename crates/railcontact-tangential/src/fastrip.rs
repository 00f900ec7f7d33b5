//! FaStrip: strip-theory variant of FASTSIM.
//!
//! The patch is cut into equal lateral strips. Each strip uses the
//! strip flexibility and takes the spin contribution to the
//! longitudinal slip at the strip centre. For small creepages the
//! resultant forces are pulled towards Kalker's linear theory.

use railcontact_math::DVec2;
use railcontact_normal::ContactPatch;
use railcontact_types::constants::{
    EPSILON, FORCE_EPSILON, LINEAR_CORRECTION_MAX, LINEAR_CORRECTION_MIN,
};
use railcontact_types::ContactResult;

use crate::coefficients::{Flexibility, KalkerCoefficients};
use crate::config::TangentialConfig;
use crate::creepage::Creepage;
use crate::fastsim::{validate_inputs, FastSim};
use crate::strategy::{LinearCorrection, TangentialContactModel, TangentialSolution};

/// Equal-width lateral strips over `[-b, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub half_width: f64,
    pub count: usize,
}

impl StripLayout {
    pub fn new(b: f64, count: usize) -> Self {
        Self {
            half_width: b,
            count: count.max(1),
        }
    }

    /// Strip width `2b / count`.
    pub fn width(&self) -> f64 {
        2.0 * self.half_width / self.count as f64
    }

    /// Strip containing lateral coordinate `y`; `y = b` falls in the last strip.
    pub fn index_of(&self, y: f64) -> usize {
        let width = self.width();
        if width <= EPSILON {
            return 0;
        }
        let k = ((y + self.half_width) / width).floor();
        if k <= 0.0 {
            0
        } else {
            (k as usize).min(self.count - 1)
        }
    }

    /// Centre of strip `k`.
    pub fn center(&self, k: usize) -> f64 {
        -self.half_width + (k as f64 + 0.5) * self.width()
    }

    /// Centre of the strip containing `y`.
    pub fn center_of(&self, y: f64) -> f64 {
        self.center(self.index_of(y))
    }

    /// Rigid slip with the spin term of `ξ` taken at the strip centre and
    /// the spin term of `η` at the point's own `x`.
    pub fn rigid_slip(&self, creepage: &Creepage, x: f64, y: f64) -> DVec2 {
        DVec2::new(
            creepage.longitudinal - creepage.spin * self.center_of(y),
            creepage.lateral + creepage.spin * x,
        )
    }
}

/// Strip-theory tangential solver.
#[derive(Debug, Clone)]
pub struct FaStrip {
    inner: FastSim,
}

impl FaStrip {
    pub fn new(config: TangentialConfig) -> ContactResult<Self> {
        Ok(Self {
            inner: FastSim::new(config)?,
        })
    }

    pub fn config(&self) -> &TangentialConfig {
        self.inner.config()
    }

    /// Linear-theory forces `G·a·b·(C11 ξ, C22 η)`, signed like the
    /// marching stresses.
    pub fn linear_forces(&self, a: f64, b: f64, creepage: &Creepage) -> DVec2 {
        let c = KalkerCoefficients::fit(a, b);
        let gab = self.config().shear_modulus * a * b;
        gab * DVec2::new(c.c11, c.c22) * creepage.translational()
    }

    fn correction(&self, patch: &ContactPatch, creepage: &Creepage, forces: DVec2) -> Option<LinearCorrection> {
        if !creepage.is_small(self.config().linear_theory_threshold) {
            return None;
        }
        let linear = self.linear_forces(patch.a, patch.b, creepage);
        let factor = |linear: f64, computed: f64| {
            if computed.abs() > FORCE_EPSILON {
                (linear / computed).clamp(LINEAR_CORRECTION_MIN, LINEAR_CORRECTION_MAX)
            } else {
                1.0
            }
        };
        Some(LinearCorrection {
            uncorrected: forces,
            linear,
            factors: DVec2::new(factor(linear.x, forces.x), factor(linear.y, forces.y)),
        })
    }
}

impl TangentialContactModel for FaStrip {
    fn solve(
        &self,
        patch: &ContactPatch,
        creepage: &Creepage,
        normal_force: f64,
    ) -> ContactResult<TangentialSolution> {
        validate_inputs(patch, creepage, normal_force)?;

        let strips = StripLayout::new(patch.b, self.config().num_strips);
        let flexibility = Flexibility::strip(patch.a, strips.width(), self.config().shear_modulus);

        let grid = self.inner.grid(patch);
        let bound = self.inner.traction_bound(patch, &grid);
        let field = self
            .inner
            .march(&grid, &bound, flexibility, |x, y| strips.rigid_slip(creepage, x, y));

        let mut forces = field.resultant_force();
        let correction = self.correction(patch, creepage, forces);
        if let Some(c) = &correction {
            forces *= c.factors;
            tracing::debug!(
                fx_factor = c.factors.x,
                fy_factor = c.factors.y,
                "linear-theory correction applied"
            );
        }

        let solution = self
            .inner
            .assemble(field, forces, flexibility, normal_force, correction);
        tracing::debug!(
            solver = self.name(),
            strips = strips.count,
            fx = solution.forces.x,
            fy = solution.forces.y,
            adhesion = solution.adhesion_area,
            "tangential contact solved"
        );
        Ok(solution)
    }

    fn name(&self) -> &str {
        "fastrip"
    }
}
