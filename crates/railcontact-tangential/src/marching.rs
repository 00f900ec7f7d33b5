//! The marching recurrence of the simplified theory.
//!
//! Each lateral row is swept from the trailing edge (`i = n-1`) to the
//! leading edge (`i = 0`). A point's elastic displacement comes from the
//! shear stress of its upstream neighbour; the first masked point of a
//! run has none. Rows do not interact and are solved in parallel.

use rayon::prelude::*;

use railcontact_math::{ContactGrid, DVec2, GridField};
use railcontact_types::constants::EPSILON;

use crate::coefficients::Flexibility;
use crate::field::TractionField;

#[derive(Debug, Clone, Copy, Default)]
struct PointState {
    shear: DVec2,
    slip: DVec2,
    adhering: bool,
}

/// One sweep of the recurrence over a grid.
#[derive(Debug, Clone, Copy)]
pub struct RowMarch<'a> {
    pub grid: &'a ContactGrid,
    /// Traction bound μp per point.
    pub bound: &'a GridField<f64>,
    pub flexibility: Flexibility,
    pub shear_modulus: f64,
}

impl<'a> RowMarch<'a> {
    /// Runs the sweep; `rigid_slip(x, y)` gives the rigid slip at a point.
    pub fn run<S>(&self, rigid_slip: S) -> TractionField
    where
        S: Fn(f64, f64) -> DVec2 + Sync,
    {
        let n = self.grid.resolution();
        let rows: Vec<Vec<PointState>> = (0..n)
            .into_par_iter()
            .map(|j| self.march_row(j, &rigid_slip))
            .collect();

        let mut shear = Vec::with_capacity(n * n);
        let mut slip = Vec::with_capacity(n * n);
        let mut adhesion = Vec::with_capacity(n * n);
        for point in rows.into_iter().flatten() {
            shear.push(point.shear);
            slip.push(point.slip);
            adhesion.push(point.adhering);
        }

        TractionField {
            grid: self.grid.clone(),
            shear: GridField::from_values(n, shear),
            slip: GridField::from_values(n, slip),
            adhesion: GridField::from_values(n, adhesion),
            bound: self.bound.clone(),
        }
    }

    fn march_row<S>(&self, j: usize, rigid_slip: &S) -> Vec<PointState>
    where
        S: Fn(f64, f64) -> DVec2,
    {
        let n = self.grid.resolution();
        let dx = self.grid.rolling_step().max(EPSILON);
        let stiffness = (self.shear_modulus * dx).max(EPSILON);
        let compliance = DVec2::new(self.flexibility.l1, self.flexibility.l2);

        let mut row = vec![PointState::default(); n];
        let mut upstream: Option<DVec2> = None;

        for i in (0..n).rev() {
            if !self.grid.contains(i, j) {
                upstream = None;
                continue;
            }

            let elastic = upstream.map_or(DVec2::ZERO, |tau| tau * compliance);
            let rigid = rigid_slip(self.grid.x(i), self.grid.y(j));
            let mut slip = rigid - elastic / dx;
            let mut shear = slip * stiffness;

            let limit = self.bound.get(i, j);
            let norm = shear.length();
            let adhering = norm <= limit;
            if !adhering {
                // Coulomb saturation.
                shear = if norm > EPSILON {
                    shear * (limit / norm)
                } else {
                    DVec2::ZERO
                };
                slip = shear / stiffness;
            }

            row[i] = PointState {
                shear,
                slip,
                adhering,
            };
            upstream = Some(shear);
        }
        row
    }
}
