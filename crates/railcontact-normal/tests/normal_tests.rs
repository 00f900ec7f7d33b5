//! Integration tests for railcontact-normal.

use std::f64::consts::PI;

use approx::assert_relative_eq;
use railcontact_material::MaterialPair;
use railcontact_normal::{
    CircularProfiles, CurvatureProvider, CurvaturePair, FixedCurvatures, KikPiotrowski,
    ModifiedKikPiotrowski, NormalConfig, NormalContactModel, NormalLoad, SolveStatus,
};
use railcontact_types::ContactError;

const WHEEL_RADIUS: f64 = 0.46;
const RAIL_RADIUS: f64 = 0.3;
/// Rail head radius that makes the elliptical ratio ≈ 5.54.
const NARROW_RAIL_RADIUS: f64 = 0.015;

fn profiles(rail_radius: f64) -> Box<dyn CurvatureProvider> {
    Box::new(CircularProfiles::new(WHEEL_RADIUS, rail_radius).unwrap())
}

fn kp() -> KikPiotrowski {
    KikPiotrowski::new(profiles(RAIL_RADIUS), &MaterialPair::steel(), NormalConfig::default()).unwrap()
}

fn mkp(rail_radius: f64, config: NormalConfig) -> ModifiedKikPiotrowski {
    ModifiedKikPiotrowski::new(profiles(rail_radius), &MaterialPair::steel(), config).unwrap()
}

// ─── Curvature Tests ──────────────────────────────────────────

#[test]
fn circular_profiles_curvatures() {
    let c = profiles(RAIL_RADIUS).curvatures(0.0, 0.0).unwrap();
    assert_relative_eq!(c.longitudinal, 1.0 / WHEEL_RADIUS);
    assert_relative_eq!(c.lateral, 1.0 / RAIL_RADIUS);
    assert_relative_eq!(c.sum(), 5.507246, max_relative = 1e-6);
}

#[test]
fn yaw_blend_preserves_sum() {
    let pair = CurvaturePair::new(2.0, 6.0).unwrap();
    let yawed = pair.yawed(0.3);
    assert_relative_eq!(yawed.sum(), pair.sum(), max_relative = 1e-12);
    assert!(yawed.longitudinal > pair.longitudinal);
    assert!(yawed.lateral < pair.lateral);
}

#[test]
fn quarter_turn_swaps_curvatures() {
    let pair = CurvaturePair::new(2.0, 6.0).unwrap();
    let yawed = FixedCurvatures(pair).curvatures(PI / 2.0, 0.0).unwrap();
    assert_relative_eq!(yawed.longitudinal, 6.0, max_relative = 1e-12);
    assert_relative_eq!(yawed.lateral, 2.0, max_relative = 1e-12);
}

#[test]
fn tiny_yaw_is_ignored() {
    let pair = CurvaturePair::new(2.0, 6.0).unwrap();
    assert_eq!(pair.yawed(1e-9), pair);
}

#[test]
fn invalid_curvatures_rejected() {
    assert!(CurvaturePair::new(0.0, 1.0).is_err());
    assert!(CurvaturePair::new(1.0, f64::NAN).is_err());
    assert!(CircularProfiles::new(-0.46, 0.3).is_err());
}

// ─── Kik–Piotrowski Tests ─────────────────────────────────────

#[test]
fn reference_patch_values() {
    let patch = kp().contact_patch(1.0e5, 0.0, 0.0).unwrap();
    assert_relative_eq!(patch.a, 4.90525e-3, max_relative = 1e-3);
    assert_relative_eq!(patch.b, 3.96134e-3, max_relative = 1e-3);
    assert_relative_eq!(patch.area, 6.10454e-5, max_relative = 1e-3);
    assert_relative_eq!(patch.mean_pressure, 1.638e9, max_relative = 1e-3);
    assert_relative_eq!(patch.max_pressure, 2.457e9, max_relative = 1e-3);
    assert!(patch.ellipticity.is_none());
}

#[test]
fn peak_is_one_and_a_half_mean() {
    for force in [1.0e3, 5.0e4, 2.5e5] {
        let patch = kp().contact_patch(force, 0.0, 0.0).unwrap();
        assert_relative_eq!(patch.max_pressure, 1.5 * patch.mean_pressure, max_relative = 1e-12);
        assert_relative_eq!(patch.area, PI * patch.a * patch.b, max_relative = 1e-12);
    }
}

#[test]
fn pressure_field_shape() {
    let patch = kp().contact_patch(1.0e5, 0.0, 0.0).unwrap();
    let grid = patch.grid();
    assert_eq!(patch.pressure.resolution(), NormalConfig::default().discretization);

    for j in 0..grid.resolution() {
        for i in 0..grid.resolution() {
            let p = patch.pressure.get(i, j);
            assert!(p >= 0.0);
            assert!(p <= patch.max_pressure * (1.0 + 1e-12));
            if !grid.contains(i, j) {
                assert_eq!(p, 0.0);
            }
        }
    }
    assert_relative_eq!(patch.pressure_at(0.0, 0.0), patch.max_pressure);
    assert_eq!(patch.pressure_at(patch.a, 0.0), 0.0);
    assert_eq!(patch.pressure_at(2.0 * patch.a, 2.0 * patch.b), 0.0);
}

#[test]
fn base_round_trip_is_exact() {
    let model = kp();
    for force in [1.0e3, 1.0e5, 3.0e5] {
        let delta = model.penetration(force, 0.0, 0.0).unwrap();
        let back = model.normal_force(delta, 0.0, 0.0).unwrap();
        assert_relative_eq!(back.normal_force, force, max_relative = 1e-10);
        assert_eq!(back.status, SolveStatus::ClosedForm);
    }
}

#[test]
fn reference_penetration() {
    let delta = kp().penetration(1.0e5, 0.0, 0.0).unwrap();
    // a²(κx+κy)/3 with the reference semi-axis.
    assert_relative_eq!(delta, 4.90525e-3_f64.powi(2) * 5.507246 / 3.0, max_relative = 1e-3);
}

#[test]
fn solve_from_penetration() {
    let model = kp();
    let delta = model.penetration(1.0e5, 0.0, 0.0).unwrap();
    let solution = model.solve(NormalLoad::Penetration(delta), 0.0, 0.0).unwrap();
    assert_relative_eq!(solution.normal_force, 1.0e5, max_relative = 1e-10);
    assert_relative_eq!(solution.penetration, delta);
    assert_relative_eq!(solution.patch.a, 4.90525e-3, max_relative = 1e-3);
    assert!(!solution.status.is_degraded());
}

#[test]
fn yaw_changes_shape_not_rolling_axis() {
    let model = kp();
    let straight = model.contact_patch(1.0e5, 0.0, 0.0).unwrap();
    let yawed = model.contact_patch(1.0e5, 0.2, 0.0).unwrap();
    // The yaw blend preserves κx+κy, so `a` is unchanged.
    assert_relative_eq!(yawed.a, straight.a, max_relative = 1e-12);
    assert!(yawed.b > straight.b);
}

#[test]
fn model_name() {
    assert_eq!(kp().name(), "kik_piotrowski");
    assert_eq!(mkp(RAIL_RADIUS, NormalConfig::default()).name(), "modified_kik_piotrowski");
}

// ─── Load Contract Tests ──────────────────────────────────────

#[test]
fn both_loads_rejected() {
    let err = kp().solve_contact_problem(Some(1e-5), Some(1e5), 0.0, 0.0).unwrap_err();
    assert!(matches!(err, ContactError::InvalidLoad(_)));
}

#[test]
fn neither_load_rejected() {
    let err = kp().solve_contact_problem(None, None, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, ContactError::InvalidLoad(_)));
}

#[test]
fn non_positive_load_rejected() {
    assert!(NormalLoad::from_options(None, Some(0.0)).is_err());
    assert!(NormalLoad::from_options(Some(-1e-5), None).is_err());
    assert!(NormalLoad::from_options(None, Some(f64::INFINITY)).is_err());
    assert!(kp().solve(NormalLoad::Force(-5.0), 0.0, 0.0).is_err());
    assert!(kp().contact_patch(0.0, 0.0, 0.0).is_err());
}

#[test]
fn option_entry_point_matches_solve() {
    let model = kp();
    let a = model.solve_contact_problem(None, Some(8.0e4), 0.0, 0.0).unwrap();
    let b = model.solve(NormalLoad::Force(8.0e4), 0.0, 0.0).unwrap();
    assert_relative_eq!(a.penetration, b.penetration);
    assert_relative_eq!(a.patch.area, b.patch.area);
}

// ─── Modified Model Tests ─────────────────────────────────────

#[test]
fn modified_matches_base_below_limit() {
    let base = kp();
    let modified = mkp(RAIL_RADIUS, NormalConfig::default());

    let p0 = base.contact_patch(1.0e5, 0.0, 0.0).unwrap();
    let p1 = modified.contact_patch(1.0e5, 0.0, 0.0).unwrap();
    assert_eq!(p0.a, p1.a);
    assert_eq!(p0.b, p1.b);
    assert_eq!(p0.area, p1.area);
    assert_eq!(p0.max_pressure, p1.max_pressure);
    assert_eq!(p0.pressure, p1.pressure);

    let ellipticity = p1.ellipticity.unwrap();
    assert!(!ellipticity.non_elliptical);
    assert_relative_eq!(ellipticity.semi_axes_ratio, p1.a / p1.b, max_relative = 1e-12);

    assert_eq!(
        base.penetration(1.0e5, 0.0, 0.0).unwrap(),
        modified.penetration(1.0e5, 0.0, 0.0).unwrap()
    );
    let delta = base.penetration(1.0e5, 0.0, 0.0).unwrap();
    let estimate = modified.normal_force(delta, 0.0, 0.0).unwrap();
    assert_eq!(estimate.status, SolveStatus::ClosedForm);
}

#[test]
fn non_elliptical_correction_applied() {
    let base = KikPiotrowski::new(
        profiles(NARROW_RAIL_RADIUS),
        &MaterialPair::steel(),
        NormalConfig::default(),
    )
    .unwrap();
    let modified = mkp(NARROW_RAIL_RADIUS, NormalConfig::default());

    let elliptical = base.contact_patch(1.0e5, 0.0, 0.0).unwrap();
    let patch = modified.contact_patch(1.0e5, 0.0, 0.0).unwrap();
    assert!(patch.is_non_elliptical());

    let g = patch.ellipticity.unwrap().semi_axes_ratio;
    assert!(g > 5.0);
    let c = 1.0 - 0.25 * (1.0 - 5.0 / g);

    // `a` is the larger axis here.
    assert_relative_eq!(patch.a, elliptical.a * c.sqrt(), max_relative = 1e-12);
    assert_relative_eq!(patch.b, elliptical.b, max_relative = 1e-12);
    assert_relative_eq!(patch.area, PI * patch.a * patch.b * c, max_relative = 1e-12);
    assert_relative_eq!(
        patch.max_pressure,
        1.5 * (1.0e5 / patch.area) * (1.0 + 0.1 * (g - 5.0)),
        max_relative = 1e-12
    );
    assert_relative_eq!(patch.pressure_exponent, 0.5 + 0.1 * (g - 5.0), max_relative = 1e-12);
    assert!(patch.pressure.values().iter().all(|p| *p >= 0.0 && p.is_finite()));
}

#[test]
fn non_elliptical_penetration_is_larger() {
    let base = KikPiotrowski::new(
        profiles(NARROW_RAIL_RADIUS),
        &MaterialPair::steel(),
        NormalConfig::default(),
    )
    .unwrap();
    let modified = mkp(NARROW_RAIL_RADIUS, NormalConfig::default());
    let d0 = base.penetration(1.0e5, 0.0, 0.0).unwrap();
    let d1 = modified.penetration(1.0e5, 0.0, 0.0).unwrap();
    assert!(d1 > d0);
    assert!(d1 < 1.2 * d0);
}

#[test]
fn modified_round_trip_converges() {
    let model = mkp(NARROW_RAIL_RADIUS, NormalConfig::default());
    let force = 1.0e5;
    let delta = model.penetration(force, 0.0, 0.0).unwrap();
    let estimate = model.normal_force(delta, 0.0, 0.0).unwrap();
    assert!(matches!(estimate.status, SolveStatus::Converged { .. }));
    assert_relative_eq!(estimate.normal_force, force, max_relative = 1e-4);
}

#[test]
fn modified_round_trip_with_low_limit() {
    let config = NormalConfig {
        semi_axes_ratio_limit: 1.1,
        ..Default::default()
    };
    let model = mkp(RAIL_RADIUS, config);
    let patch = model.contact_patch(1.0e5, 0.0, 0.0).unwrap();
    assert!(patch.is_non_elliptical());

    let delta = model.penetration(1.0e5, 0.0, 0.0).unwrap();
    let solution = model.solve(NormalLoad::Penetration(delta), 0.0, 0.0).unwrap();
    assert!(!solution.status.is_degraded());
    assert_relative_eq!(solution.normal_force, 1.0e5, max_relative = 1e-4);
}

#[test]
fn root_find_fallback_returns_seed() {
    let config = NormalConfig {
        max_root_iterations: 1,
        ..Default::default()
    };
    let model = mkp(NARROW_RAIL_RADIUS, config);
    let base = KikPiotrowski::new(
        profiles(NARROW_RAIL_RADIUS),
        &MaterialPair::steel(),
        NormalConfig::default(),
    )
    .unwrap();

    let delta = model.penetration(1.0e5, 0.0, 0.0).unwrap();
    let estimate = model.normal_force(delta, 0.0, 0.0).unwrap();
    let seed = base.normal_force(delta, 0.0, 0.0).unwrap();

    assert!(estimate.status.is_degraded());
    assert!(matches!(estimate.status, SolveStatus::Fallback { .. }));
    assert_eq!(estimate.normal_force, seed.normal_force);
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn config_defaults_and_presets() {
    let config = NormalConfig::default();
    assert_eq!(config.discretization, 50);
    assert_relative_eq!(config.semi_axes_ratio_limit, 5.0);
    assert!(config.validate().is_ok());
    assert!(NormalConfig::coarse().validate().is_ok());
    assert!(NormalConfig::high_quality().discretization > config.discretization);
}

#[test]
fn config_validation() {
    let bad = NormalConfig {
        discretization: 1,
        ..Default::default()
    };
    assert!(bad.validate().is_err());
    let bad = NormalConfig {
        semi_axes_ratio_limit: 0.5,
        ..Default::default()
    };
    assert!(matches!(bad.validate(), Err(ContactError::InvalidConfig(_))));
    assert!(KikPiotrowski::new(profiles(RAIL_RADIUS), &MaterialPair::steel(), bad).is_err());
}

#[test]
fn config_from_partial_toml() {
    let config: NormalConfig = toml::from_str("semi_axes_ratio_limit = 3.0").unwrap();
    assert_relative_eq!(config.semi_axes_ratio_limit, 3.0);
    assert_eq!(config.discretization, 50);
}

#[test]
fn solution_serializes() {
    let solution = kp().solve(NormalLoad::Force(1.0e5), 0.0, 0.0).unwrap();
    let json = serde_json::to_string(&solution).unwrap();
    assert!(json.contains("\"ClosedForm\""));
    assert!(json.contains("max_pressure"));
}
