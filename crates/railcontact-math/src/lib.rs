//! # railcontact-math
//!
//! Numerical primitives shared by the contact solvers.
//!
//! Provides:
//! - Re-export of `glam::DVec2` as the canonical 2-D vector type
//! - [`ContactGrid`]: rectangular sampling grid with an ellipse mask
//! - [`GridField`]: row-major per-point storage over a grid
//! - [`ScalarMinimizer`]: derivative-free 1-D minimisation (Nelder–Mead)

pub mod field;
pub mod grid;
pub mod minimize;

pub use field::GridField;
pub use grid::{linspace, ContactGrid};
pub use minimize::{Minimum, ScalarMinimizer};

// Re-export glam types as the canonical math types for railcontact.
pub use glam::DVec2;
