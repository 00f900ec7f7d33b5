//! Per-point storage over a [`ContactGrid`](crate::ContactGrid).

use serde::{Deserialize, Serialize};

/// A value per grid point, stored row-major (`j * n + i`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridField<T> {
    resolution: usize,
    values: Vec<T>,
}

impl<T: Copy + Default> GridField<T> {
    /// Creates a field filled with `T::default()`.
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            values: vec![T::default(); resolution * resolution],
        }
    }

    /// Builds a field by evaluating `f(i, j)` at every point.
    pub fn from_fn(resolution: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut values = Vec::with_capacity(resolution * resolution);
        for j in 0..resolution {
            for i in 0..resolution {
                values.push(f(i, j));
            }
        }
        Self { resolution, values }
    }

    /// Value at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.values[j * self.resolution + i]
    }

    /// Overwrites the value at `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.values[j * self.resolution + i] = value;
    }

    /// Applies `f` to every value, producing a new field.
    pub fn map<U: Copy + Default>(&self, f: impl Fn(T) -> U) -> GridField<U> {
        GridField {
            resolution: self.resolution,
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Values at the points where `mask` is set, in flat order.
    pub fn masked(&self, mask: &[bool]) -> Vec<T> {
        self.values
            .iter()
            .zip(mask)
            .filter(|(_, &m)| m)
            .map(|(&v, _)| v)
            .collect()
    }
}

impl<T> GridField<T> {
    /// Wraps row-major values; `values.len()` must be `resolution²`.
    pub fn from_values(resolution: usize, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), resolution * resolution);
        Self { resolution, values }
    }

    /// Number of samples per direction.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// All values in flat order.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}
