//! Physical constants and solver defaults.

/// Young's modulus of wheel and rail steel (Pa).
pub const STEEL_YOUNGS_MODULUS: f64 = 210.0e9;

/// Poisson ratio of wheel and rail steel.
pub const STEEL_POISSON_RATIO: f64 = 0.3;

/// Density of wheel and rail steel (kg/m³).
pub const STEEL_DENSITY: f64 = 7850.0;

/// Default combined shear modulus used by the traction solvers (Pa).
pub const DEFAULT_SHEAR_MODULUS: f64 = 8.0e10;

/// Default Coulomb friction coefficient.
pub const DEFAULT_FRICTION_COEFFICIENT: f64 = 0.3;

/// Default number of grid points per direction.
pub const DEFAULT_DISCRETIZATION: usize = 50;

/// Default semi-axes ratio above which a patch is treated as non-elliptical.
pub const DEFAULT_SEMI_AXES_RATIO_LIMIT: f64 = 5.0;

/// Default number of lateral strips for the strip solver.
pub const DEFAULT_NUM_STRIPS: usize = 20;

/// Creepage magnitude below which linear theory is considered valid.
pub const LINEAR_THEORY_THRESHOLD: f64 = 1.0e-4;

/// Bounds of the linear-theory force correction factor.
pub const LINEAR_CORRECTION_MIN: f64 = 0.8;
pub const LINEAR_CORRECTION_MAX: f64 = 1.2;

/// Forces below this magnitude (N) are not corrected.
pub const FORCE_EPSILON: f64 = 1.0e-10;

/// Relative penetration residual accepted by the inverse normal solve.
pub const DEFAULT_ROOT_TOLERANCE: f64 = 1.0e-6;

/// Iteration cap of the inverse normal solve.
pub const DEFAULT_MAX_ROOT_ITERATIONS: u64 = 500;

/// Yaw angles (rad) below this are treated as zero.
pub const YAW_EPSILON: f64 = 1.0e-6;

/// Floor applied to lengths and denominators to avoid division by zero.
pub const EPSILON: f64 = 1.0e-12;
