//! Kalker creepage coefficients and the flexibility parameters derived
//! from them.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use railcontact_types::constants::EPSILON;

/// Kalker's linear-theory coefficients from a polynomial fit in the
/// semi-axes ratio `g = max(a/b, b/a)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KalkerCoefficients {
    /// Longitudinal coefficient.
    pub c11: f64,
    /// Lateral coefficient.
    pub c22: f64,
    /// Lateral/spin coupling coefficient.
    pub c23: f64,
}

impl KalkerCoefficients {
    /// Fits the coefficients for an ellipse with semi-axes `a`, `b`.
    pub fn fit(a: f64, b: f64) -> Self {
        let a = a.max(EPSILON);
        let b = b.max(EPSILON);
        let g = (a / b).max(b / a);
        if a >= b {
            Self {
                c11: 2.39 + 0.338 * g,
                c22: 2.39 + 0.517 / g,
                c23: 0.442 + 0.165 / g,
            }
        } else {
            Self {
                c11: 2.39 + 0.338 / g,
                c22: 2.39 + 0.517 * g,
                c23: 0.442 + 0.165 * g,
            }
        }
    }
}

/// Flexibility parameters `L1` (longitudinal), `L2` (lateral) and `L3`
/// (spin), in m/Pa.
///
/// The marching recurrence uses `L1` and `L2`; `L3` is reported for
/// completeness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flexibility {
    pub l1: f64,
    pub l2: f64,
    pub l3: f64,
}

impl Flexibility {
    /// Full-ellipse flexibility:
    /// `L1 = C11/(4Ga)`, `L2 = C22/(4Gb)`, `L3 = C23/(4G sqrt(ab))`.
    pub fn full_ellipse(a: f64, b: f64, shear_modulus: f64) -> Self {
        let c = KalkerCoefficients::fit(a, b);
        let a = a.max(EPSILON);
        let b = b.max(EPSILON);
        let four_g = (4.0 * shear_modulus).max(EPSILON);
        Self {
            l1: c.c11 / (four_g * a),
            l2: c.c22 / (four_g * b),
            l3: c.c23 / (four_g * (a * b).sqrt()),
        }
    }

    /// Strip flexibility for strips of width `w` across a patch of
    /// rolling semi-axis `a`, with `r = w/(2a)`:
    /// `L1 = π/(4Gw)(1 + 1.15r)`, `L2 = π/(4Gw)(1 + 1.15/r)`,
    /// `L3 = π/(4Gw)·0.5·sqrt(r)`.
    pub fn strip(a: f64, strip_width: f64, shear_modulus: f64) -> Self {
        let w = strip_width.max(EPSILON);
        let r = (w / (2.0 * a.max(EPSILON))).max(EPSILON);
        let scale = PI / (4.0 * shear_modulus * w).max(EPSILON);
        Self {
            l1: scale * (1.0 + 1.15 * r),
            l2: scale * (1.0 + 1.15 / r),
            l3: scale * 0.5 * r.sqrt(),
        }
    }
}
