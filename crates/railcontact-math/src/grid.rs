//! Contact-patch discretisation.
//!
//! The patch `[-a, a] × [-b, b]` is sampled with `n` points per
//! direction. Points are addressed by `(i, j)` where `i` runs along the
//! rolling direction (x) and `j` along the lateral direction (y); the
//! flat index is `j * n + i` (one lateral row after another).

use serde::{Deserialize, Serialize};

/// `n` evenly spaced samples from `start` to `end` inclusive.
///
/// A single sample is placed at the midpoint.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.5 * (start + end)],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|k| start + step * k as f64).collect()
        }
    }
}

/// Rectangular sampling grid over an elliptical contact patch.
///
/// The mask marks points with `(x/a)² + (y/b)² ≤ 1`. Non-positive
/// semi-axes produce an empty mask rather than NaN comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactGrid {
    a: f64,
    b: f64,
    resolution: usize,
    xs: Vec<f64>,
    ys: Vec<f64>,
    mask: Vec<bool>,
}

impl ContactGrid {
    /// Discretises the patch with semi-axes `a` (rolling) and `b` (lateral).
    pub fn discretize(a: f64, b: f64, resolution: usize) -> Self {
        let xs = linspace(-a, a, resolution);
        let ys = linspace(-b, b, resolution);
        let valid = a > 0.0 && b > 0.0 && a.is_finite() && b.is_finite();

        let mut mask = Vec::with_capacity(resolution * resolution);
        for &y in &ys {
            for &x in &xs {
                mask.push(valid && (x / a).powi(2) + (y / b).powi(2) <= 1.0);
            }
        }

        Self {
            a,
            b,
            resolution,
            xs,
            ys,
            mask,
        }
    }

    /// Semi-axis in the rolling direction.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Semi-axis in the lateral direction.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Number of samples per direction.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Total number of grid points (`n²`).
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    /// Returns true if the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Flat index of point `(i, j)`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        j * self.resolution + i
    }

    /// Rolling coordinate of column `i`.
    #[inline]
    pub fn x(&self, i: usize) -> f64 {
        self.xs[i]
    }

    /// Lateral coordinate of row `j`.
    #[inline]
    pub fn y(&self, j: usize) -> f64 {
        self.ys[j]
    }

    /// Whether point `(i, j)` lies inside the ellipse.
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.mask[self.index(i, j)]
    }

    /// The inclusion mask in flat order.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Number of points inside the ellipse.
    pub fn masked_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Marching step in the rolling direction, `2a / n`.
    pub fn rolling_step(&self) -> f64 {
        if self.resolution == 0 {
            return 0.0;
        }
        2.0 * self.a / self.resolution as f64
    }

    /// Lateral extent per row, `2b / n`.
    pub fn lateral_step(&self) -> f64 {
        if self.resolution == 0 {
            return 0.0;
        }
        2.0 * self.b / self.resolution as f64
    }

    /// Area represented by one grid point.
    pub fn cell_area(&self) -> f64 {
        self.rolling_step() * self.lateral_step()
    }

    /// Iterates over `(i, j, x, y)` of all masked points, row by row.
    pub fn masked_points(&self) -> impl Iterator<Item = (usize, usize, f64, f64)> + '_ {
        let n = self.resolution;
        (0..n).flat_map(move |j| {
            (0..n)
                .filter(move |&i| self.contains(i, j))
                .map(move |i| (i, j, self.xs[i], self.ys[j]))
        })
    }
}
