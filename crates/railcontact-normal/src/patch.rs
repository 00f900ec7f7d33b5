//! Contact patch geometry and pressure.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use railcontact_math::{ContactGrid, GridField};
use railcontact_types::constants::EPSILON;

/// Shape parameters from which a [`ContactPatch`] is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatchShape {
    /// Semi-axis in the rolling direction (m).
    pub a: f64,
    /// Semi-axis in the lateral direction (m).
    pub b: f64,
    /// Contact area (m²).
    pub area: f64,
    /// Peak pressure divided by mean pressure (1.5 for a Hertzian ellipse).
    pub peak_factor: f64,
    /// Exponent of the pressure law `p = p_max (1 - r²)^exponent`.
    pub exponent: f64,
}

impl PatchShape {
    /// Semi-ellipsoidal (Hertzian) pressure over the ellipse `a × b`.
    pub fn elliptical(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            area: PI * a * b,
            peak_factor: 1.5,
            exponent: 0.5,
        }
    }
}

/// Non-ellipticity diagnostics reported by the modified model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipticity {
    /// Whether the non-elliptical correction was applied.
    pub non_elliptical: bool,
    /// `max(a/b, b/a)` of the uncorrected ellipse.
    pub semi_axes_ratio: f64,
}

/// A solved contact patch.
///
/// Immutable once built; the pressure field is sampled on a
/// [`ContactGrid`] of the configured resolution and is zero outside
/// the ellipse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactPatch {
    /// Semi-axis in the rolling direction (m).
    pub a: f64,
    /// Semi-axis in the lateral direction (m).
    pub b: f64,
    /// Contact area (m²).
    pub area: f64,
    /// Peak pressure at the patch centre (Pa).
    pub max_pressure: f64,
    /// Normal force divided by area (Pa).
    pub mean_pressure: f64,
    /// Exponent of the pressure law.
    pub pressure_exponent: f64,
    /// Sampled pressure (Pa).
    pub pressure: GridField<f64>,
    /// Present when produced by the modified model.
    pub ellipticity: Option<Ellipticity>,
}

impl ContactPatch {
    /// Assembles the patch carrying `normal_force` over `shape`.
    pub fn new(
        shape: PatchShape,
        normal_force: f64,
        resolution: usize,
        ellipticity: Option<Ellipticity>,
    ) -> Self {
        let area = shape.area.max(EPSILON);
        let mean_pressure = normal_force / area;
        let max_pressure = shape.peak_factor * mean_pressure;

        let mut patch = Self {
            a: shape.a,
            b: shape.b,
            area: shape.area,
            max_pressure,
            mean_pressure,
            pressure_exponent: shape.exponent,
            pressure: GridField::new(0),
            ellipticity,
        };

        let grid = ContactGrid::discretize(shape.a, shape.b, resolution);
        let pressure = GridField::from_fn(resolution, |i, j| {
            if grid.contains(i, j) {
                patch.pressure_at(grid.x(i), grid.y(j))
            } else {
                0.0
            }
        });
        patch.pressure = pressure;
        patch
    }

    /// Pressure at an arbitrary point of the patch plane (Pa).
    ///
    /// Zero on and outside the ellipse; never negative.
    pub fn pressure_at(&self, x: f64, y: f64) -> f64 {
        let a = self.a.max(EPSILON);
        let b = self.b.max(EPSILON);
        let remainder = 1.0 - (x / a).powi(2) - (y / b).powi(2);
        if remainder <= 0.0 {
            return 0.0;
        }
        (self.max_pressure * remainder.powf(self.pressure_exponent)).max(0.0)
    }

    /// Grid matching the sampled pressure field.
    pub fn grid(&self) -> ContactGrid {
        ContactGrid::discretize(self.a, self.b, self.pressure.resolution())
    }

    /// `max(a/b, b/a)`.
    pub fn semi_axes_ratio(&self) -> f64 {
        let a = self.a.max(EPSILON);
        let b = self.b.max(EPSILON);
        (a / b).max(b / a)
    }

    /// Whether the modified model flagged this patch as non-elliptical.
    pub fn is_non_elliptical(&self) -> bool {
        self.ellipticity.is_some_and(|e| e.non_elliptical)
    }
}
