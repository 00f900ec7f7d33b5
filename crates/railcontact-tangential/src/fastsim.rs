//! FASTSIM: Kalker's simplified theory of rolling contact.

use railcontact_math::{ContactGrid, DVec2, GridField};
use railcontact_normal::ContactPatch;
use railcontact_types::constants::EPSILON;
use railcontact_types::{ContactError, ContactResult};

use crate::coefficients::Flexibility;
use crate::config::TangentialConfig;
use crate::creepage::Creepage;
use crate::field::TractionField;
use crate::marching::RowMarch;
use crate::strategy::{LinearCorrection, TangentialContactModel, TangentialSolution};

/// Checks the inputs shared by every tangential solve.
pub(crate) fn validate_inputs(
    patch: &ContactPatch,
    creepage: &Creepage,
    normal_force: f64,
) -> ContactResult<()> {
    creepage.validate()?;
    if !(normal_force.is_finite() && normal_force >= 0.0) {
        return Err(ContactError::InvalidLoad(format!(
            "normal force must be non-negative and finite, got {normal_force}"
        )));
    }
    if !(patch.a.is_finite() && patch.b.is_finite()) {
        return Err(ContactError::InvalidGeometry(format!(
            "patch semi-axes must be finite, got a = {}, b = {}",
            patch.a, patch.b
        )));
    }
    Ok(())
}

/// Simplified-theory solver with full-ellipse flexibility.
#[derive(Debug, Clone)]
pub struct FastSim {
    config: TangentialConfig,
}

impl FastSim {
    pub fn new(config: TangentialConfig) -> ContactResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TangentialConfig {
        &self.config
    }

    /// Full-ellipse flexibility for the patch semi-axes.
    pub fn flexibility(&self, a: f64, b: f64) -> Flexibility {
        Flexibility::full_ellipse(a, b, self.config.shear_modulus)
    }

    /// Marching grid at this solver's resolution.
    pub(crate) fn grid(&self, patch: &ContactPatch) -> ContactGrid {
        ContactGrid::discretize(patch.a, patch.b, self.config.discretization)
    }

    /// Coulomb bound `μ p(x, y)` sampled on `grid`.
    pub(crate) fn traction_bound(&self, patch: &ContactPatch, grid: &ContactGrid) -> GridField<f64> {
        let mu = self.config.friction_coefficient;
        GridField::from_fn(grid.resolution(), |i, j| {
            if grid.contains(i, j) {
                mu * patch.pressure_at(grid.x(i), grid.y(j))
            } else {
                0.0
            }
        })
    }

    /// Sweeps the grid with the given flexibility and rigid-slip law.
    pub(crate) fn march<S>(
        &self,
        grid: &ContactGrid,
        bound: &GridField<f64>,
        flexibility: Flexibility,
        rigid_slip: S,
    ) -> TractionField
    where
        S: Fn(f64, f64) -> DVec2 + Sync,
    {
        RowMarch {
            grid,
            bound,
            flexibility,
            shear_modulus: self.config.shear_modulus,
        }
        .run(rigid_slip)
    }

    /// Integrates the field into a solution.
    pub(crate) fn assemble(
        &self,
        field: TractionField,
        forces: DVec2,
        flexibility: Flexibility,
        normal_force: f64,
        linear_correction: Option<LinearCorrection>,
    ) -> TangentialSolution {
        let capacity = self.config.friction_coefficient * normal_force;
        let utilisation = if capacity > EPSILON {
            forces.length() / capacity
        } else {
            0.0
        };
        TangentialSolution {
            forces,
            moment: field.spin_moment(),
            adhesion_area: field.adhesion_fraction(),
            utilisation,
            flexibility,
            field,
            linear_correction,
        }
    }
}

impl TangentialContactModel for FastSim {
    fn solve(
        &self,
        patch: &ContactPatch,
        creepage: &Creepage,
        normal_force: f64,
    ) -> ContactResult<TangentialSolution> {
        validate_inputs(patch, creepage, normal_force)?;

        let grid = self.grid(patch);
        let bound = self.traction_bound(patch, &grid);
        let flexibility = self.flexibility(patch.a, patch.b);
        let field = self.march(&grid, &bound, flexibility, |x, y| creepage.rigid_slip(x, y));
        let forces = field.resultant_force();
        let solution = self.assemble(field, forces, flexibility, normal_force, None);

        tracing::debug!(
            solver = self.name(),
            fx = solution.forces.x,
            fy = solution.forces.y,
            moment = solution.moment,
            adhesion = solution.adhesion_area,
            "tangential contact solved"
        );
        Ok(solution)
    }

    fn name(&self) -> &str {
        "fastsim"
    }
}
