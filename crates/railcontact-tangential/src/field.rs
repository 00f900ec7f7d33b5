//! Per-point traction state over the contact grid.

use serde::{Deserialize, Serialize};

use railcontact_math::{ContactGrid, DVec2, GridField};

/// Shear stress, local slip and adhesion state at every grid point.
///
/// Points outside the ellipse hold zeros and are never adhering. At
/// masked points `|τ| ≤ bound` holds, with equality where sliding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TractionField {
    /// Grid the field is sampled on.
    pub grid: ContactGrid,
    /// Shear stress τ (Pa).
    pub shear: GridField<DVec2>,
    /// Local slip (dimensionless).
    pub slip: GridField<DVec2>,
    /// Whether the point sticks.
    pub adhesion: GridField<bool>,
    /// Traction bound μp (Pa).
    pub bound: GridField<f64>,
}

impl TractionField {
    /// Tangential force `Σ τ·dA` (N).
    pub fn resultant_force(&self) -> DVec2 {
        let sum: DVec2 = self
            .grid
            .masked_points()
            .map(|(i, j, _, _)| self.shear.get(i, j))
            .sum();
        sum * self.grid.cell_area()
    }

    /// Spin moment `Σ (xτy - yτx)·dA` (N·m).
    pub fn spin_moment(&self) -> f64 {
        let sum: f64 = self
            .grid
            .masked_points()
            .map(|(i, j, x, y)| {
                let tau = self.shear.get(i, j);
                x * tau.y - y * tau.x
            })
            .sum();
        sum * self.grid.cell_area()
    }

    /// Number of adhering points inside the ellipse.
    pub fn adhering_count(&self) -> usize {
        self.grid
            .masked_points()
            .filter(|&(i, j, _, _)| self.adhesion.get(i, j))
            .count()
    }

    /// Adhering points over masked points; `0.0` for an empty patch.
    pub fn adhesion_fraction(&self) -> f64 {
        let masked = self.grid.masked_count();
        if masked == 0 {
            return 0.0;
        }
        self.adhering_count() as f64 / masked as f64
    }

    /// Largest `|τ| / (μp)` over the patch.
    ///
    /// Zero-load points with zero stress count as `0`; a value above one
    /// means the Coulomb bound is violated.
    pub fn max_coulomb_ratio(&self) -> f64 {
        self.grid
            .masked_points()
            .map(|(i, j, _, _)| {
                let tau = self.shear.get(i, j).length();
                let bound = self.bound.get(i, j);
                if bound > 0.0 {
                    tau / bound
                } else if tau > 0.0 {
                    f64::INFINITY
                } else {
                    0.0
                }
            })
            .fold(0.0, f64::max)
    }

    /// Frictional power density `|τ·s|` per point (Pa); zero outside the patch.
    pub fn friction_power_density(&self) -> GridField<f64> {
        let n = self.grid.resolution();
        GridField::from_fn(n, |i, j| {
            if self.grid.contains(i, j) {
                self.shear.get(i, j).dot(self.slip.get(i, j)).abs()
            } else {
                0.0
            }
        })
    }

    /// Shear stress at masked points, row by row.
    pub fn masked_shear(&self) -> Vec<DVec2> {
        self.shear.masked(self.grid.mask())
    }

    /// Slip at masked points, row by row.
    pub fn masked_slip(&self) -> Vec<DVec2> {
        self.slip.masked(self.grid.mask())
    }
}
