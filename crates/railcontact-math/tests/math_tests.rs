//! Integration tests for railcontact-math.

use approx::assert_relative_eq;
use railcontact_math::{linspace, ContactGrid, DVec2, GridField, ScalarMinimizer};

// ─── linspace Tests ───────────────────────────────────────────

#[test]
fn linspace_endpoints() {
    let v = linspace(-2.0, 2.0, 5);
    assert_eq!(v, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
}

#[test]
fn linspace_degenerate_counts() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(-1.0, 1.0, 1), vec![0.0]);
}

// ─── ContactGrid Tests ────────────────────────────────────────

#[test]
fn grid_spans_patch() {
    let grid = ContactGrid::discretize(0.006, 0.004, 50);
    assert_eq!(grid.len(), 2500);
    assert_relative_eq!(grid.x(0), -0.006);
    assert_relative_eq!(grid.x(49), 0.006);
    assert_relative_eq!(grid.y(0), -0.004);
    assert_relative_eq!(grid.y(49), 0.004);
}

#[test]
fn grid_mask_is_ellipse() {
    let grid = ContactGrid::discretize(2.0, 1.0, 5);
    // Row j = 2 is y = 0: the whole row lies inside.
    for i in 0..5 {
        assert!(grid.contains(i, 2));
    }
    // Corners are outside.
    assert!(!grid.contains(0, 0));
    assert!(!grid.contains(4, 4));
    // Axis tips are on the boundary and included.
    assert!(grid.contains(2, 0));
    assert!(grid.contains(2, 4));
}

#[test]
fn grid_mask_fraction_approaches_pi_over_four() {
    let grid = ContactGrid::discretize(1.0, 1.0, 200);
    let fraction = grid.masked_count() as f64 / grid.len() as f64;
    assert!((fraction - std::f64::consts::FRAC_PI_4).abs() < 0.02);
}

#[test]
fn grid_degenerate_axes_have_empty_mask() {
    let grid = ContactGrid::discretize(0.0, 1.0, 10);
    assert_eq!(grid.masked_count(), 0);
    let grid = ContactGrid::discretize(1.0, -1.0, 10);
    assert_eq!(grid.masked_count(), 0);
}

#[test]
fn grid_cell_area() {
    let grid = ContactGrid::discretize(0.005, 0.002, 10);
    assert_relative_eq!(grid.rolling_step(), 0.001);
    assert_relative_eq!(grid.lateral_step(), 0.0004);
    assert_relative_eq!(grid.cell_area(), 0.001 * 0.0004);
}

#[test]
fn masked_points_match_count() {
    let grid = ContactGrid::discretize(3.0, 2.0, 21);
    assert_eq!(grid.masked_points().count(), grid.masked_count());
    for (i, j, x, y) in grid.masked_points() {
        assert!(grid.contains(i, j));
        assert!((x / 3.0).powi(2) + (y / 2.0).powi(2) <= 1.0);
    }
}

// ─── GridField Tests ──────────────────────────────────────────

#[test]
fn field_row_major_layout() {
    let field = GridField::from_fn(3, |i, j| (10 * j + i) as f64);
    assert_eq!(field.get(2, 1), 12.0);
    assert_eq!(field.values()[5], 12.0);
}

#[test]
fn field_masked_values() {
    let mut field: GridField<DVec2> = GridField::new(2);
    field.set(1, 0, DVec2::new(1.0, 2.0));
    let picked = field.masked(&[false, true, false, false]);
    assert_eq!(picked, vec![DVec2::new(1.0, 2.0)]);
}

#[test]
fn field_serialization() {
    let field = GridField::from_fn(2, |i, j| i + j);
    let json = serde_json::to_string(&field).unwrap();
    let recovered: GridField<usize> = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, field);
}

// ─── ScalarMinimizer Tests ────────────────────────────────────

#[test]
fn minimizer_finds_quadratic_minimum() {
    let min = ScalarMinimizer::default()
        .minimize(|x| (x - 3.0).powi(2), 1.0)
        .unwrap();
    assert!(min.converged);
    assert!((min.argument - 3.0).abs() < 1e-6);
}

#[test]
fn minimizer_penalises_non_finite_cost() {
    // sqrt is NaN for negative arguments; the root is at x = 4.
    let min = ScalarMinimizer::default()
        .minimize(|x| (x.sqrt() - 2.0).powi(2), 1.0)
        .unwrap();
    assert!((min.argument - 4.0).abs() < 1e-4);
}

#[test]
fn minimizer_reports_iteration_cap() {
    let min = ScalarMinimizer::with_max_iterations(1)
        .minimize(|x| (x - 100.0).powi(2), 1.0)
        .unwrap();
    assert!(!min.converged);
    assert!(min.iterations <= 1);
}
