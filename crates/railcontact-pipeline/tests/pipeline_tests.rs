//! Integration tests for railcontact-pipeline.

use approx::assert_relative_eq;
use railcontact_normal::{NormalConfig, NormalLoad};
use railcontact_pipeline::{
    sweep_values, ContactPipeline, CreepCurvePoint, LoadConfig, NormalModelKind, ScenarioConfig,
    TangentialSolverKind, WearSection,
};
use railcontact_tangential::{Creepage, CreepageAxis};
use railcontact_telemetry::{EventKind, VecSink};
use railcontact_types::ContactError;

const FULL_SCENARIO: &str = r#"
name = "tangent_track"

[geometry]
wheel_radius = 0.46
rail_radius = 0.3

[materials]
wheel = "R8T"
rail = "UIC60 900A"
friction_coefficient = 0.35

[normal]
model = "modified_kik_piotrowski"

[normal.config]
discretization = 30

[load]
normal_force = 80000.0

[tangential]
solver = "fastrip"
num_strips = 12

[creepage]
longitudinal = 0.002
lateral = -0.001

[wear]
sliding_distance = 500.0
"#;

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn parse_full_scenario() {
    let scenario = ScenarioConfig::from_toml_str(FULL_SCENARIO).unwrap();
    assert_eq!(scenario.name, "tangent_track");
    assert_eq!(scenario.normal.model, NormalModelKind::ModifiedKikPiotrowski);
    assert_eq!(scenario.normal.config.discretization, 30);
    assert_relative_eq!(scenario.normal.config.semi_axes_ratio_limit, 5.0);
    assert_eq!(scenario.tangential.solver, TangentialSolverKind::Fastrip);
    assert_relative_eq!(scenario.creepage.lateral, -0.001);
    assert_eq!(scenario.creepage.spin, 0.0);
    assert_relative_eq!(scenario.wear.as_ref().unwrap().sliding_distance, 500.0);
}

#[test]
fn minimal_scenario_uses_defaults() {
    let scenario = ScenarioConfig::from_toml_str("[load]\nnormal_force = 50000.0\n").unwrap();
    assert_eq!(scenario.name, "scenario");
    assert_eq!(scenario.normal.model, NormalModelKind::KikPiotrowski);
    assert_eq!(scenario.tangential.solver, TangentialSolverKind::Fastsim);
    assert_eq!(scenario.creepage, Creepage::default());
    assert!(scenario.wear.is_none());
}

#[test]
fn load_contract_enforced() {
    let both = "[load]\nnormal_force = 1.0\npenetration = 1e-5\n";
    assert!(matches!(
        ScenarioConfig::from_toml_str(both),
        Err(ContactError::InvalidLoad(_))
    ));
    let neither = "[load]\n";
    assert!(matches!(
        ScenarioConfig::from_toml_str(neither),
        Err(ContactError::InvalidLoad(_))
    ));
    assert!(matches!(
        ScenarioConfig::from_toml_str("name = 3"),
        Err(ContactError::Serialization(_))
    ));
}

#[test]
fn unknown_material_rejected() {
    let mut scenario = ScenarioConfig::reference();
    scenario.materials.wheel = "unobtainium".into();
    assert!(matches!(
        scenario.material_pair(),
        Err(ContactError::InvalidMaterial(_))
    ));
    assert!(ContactPipeline::from_scenario(&scenario).is_err());
}

#[test]
fn tangential_config_from_materials_and_overrides() {
    let scenario = ScenarioConfig::from_toml_str(FULL_SCENARIO).unwrap();
    let materials = scenario.material_pair().unwrap();
    let config = scenario.tangential_config(&materials);
    assert_relative_eq!(config.shear_modulus, 210.0e9 / 2.6, max_relative = 1e-12);
    assert_relative_eq!(config.friction_coefficient, 0.35);
    assert_eq!(config.num_strips, 12);
    assert_eq!(config.discretization, 50);

    let wear = scenario.wear_config(&materials).unwrap();
    assert_relative_eq!(wear.density, 7850.0);
    assert_eq!(wear.rail_material, "UIC60 900A");
}

#[test]
fn scenario_toml_round_trip() {
    let mut scenario = ScenarioConfig::from_toml_str(FULL_SCENARIO).unwrap();
    scenario.normal.config = NormalConfig::high_quality();
    let text = scenario.to_toml_string().unwrap();
    let back = ScenarioConfig::from_toml_str(&text).unwrap();
    assert_eq!(back, scenario);
}

// ─── Pipeline Tests ───────────────────────────────────────────

#[test]
fn reference_run() {
    let scenario = ScenarioConfig::reference();
    let mut pipeline = ContactPipeline::from_scenario(&scenario).unwrap();
    let outcome = pipeline.run_scenario(&scenario).unwrap();

    assert_relative_eq!(outcome.total_forces.normal, 1.0e5);
    assert_relative_eq!(outcome.normal.patch.a, 4.90525e-3, max_relative = 1e-3);
    let tangential = outcome.tangential.as_ref().unwrap();
    assert_eq!(outcome.total_forces.longitudinal, tangential.forces.x);
    assert!(tangential.field.max_coulomb_ratio() <= 1.0 + 1e-9);
    assert!(outcome.wear.is_none());
    assert_eq!(pipeline.runs(), 1);
}

#[test]
fn full_scenario_run_with_wear() {
    let scenario = ScenarioConfig::from_toml_str(FULL_SCENARIO).unwrap();
    let mut pipeline = ContactPipeline::from_scenario(&scenario).unwrap();
    assert_eq!(pipeline.normal_model().name(), "modified_kik_piotrowski");
    assert_eq!(pipeline.tangential_model().unwrap().name(), "fastrip");

    let outcome = pipeline.run_scenario(&scenario).unwrap();
    let wear = outcome.wear.unwrap();
    assert!(wear.volume >= 0.0 && wear.volume.is_finite());
    assert!(outcome.normal.patch.ellipticity.is_some());
}

#[test]
fn normal_only_pipeline() {
    let scenario = ScenarioConfig::reference();
    let materials = scenario.material_pair().unwrap();
    let mut pipeline = ContactPipeline::new(scenario.normal_model(&materials).unwrap());
    let outcome = pipeline
        .run(NormalLoad::Force(1.0e5), &Creepage::longitudinal(1e-3))
        .unwrap();
    assert!(outcome.tangential.is_none());
    assert_eq!(outcome.total_forces.longitudinal, 0.0);
}

#[test]
fn telemetry_events_per_run() {
    let mut scenario = ScenarioConfig::from_toml_str(FULL_SCENARIO).unwrap();
    scenario.creepage = Creepage::new(5e-5, 0.0, 0.0);
    let mut pipeline = ContactPipeline::from_scenario(&scenario).unwrap();
    let sink = VecSink::new();
    pipeline.add_sink(Box::new(sink.clone()));

    pipeline.run_scenario(&scenario).unwrap();
    pipeline.run_scenario(&scenario).unwrap();

    let events = sink.events();
    let first: Vec<_> = events.iter().filter(|e| e.sequence == 0).collect();
    assert!(matches!(first[0].kind, EventKind::NormalSolved { .. }));
    assert!(first
        .iter()
        .any(|e| matches!(e.kind, EventKind::TangentialSolved { .. })));
    assert!(first
        .iter()
        .any(|e| matches!(e.kind, EventKind::LinearCorrectionApplied { .. })));
    assert!(first
        .iter()
        .any(|e| matches!(e.kind, EventKind::WearEstimated { .. })));
    assert_eq!(events.iter().filter(|e| e.sequence == 1).count(), first.len());
}

#[test]
fn root_find_fallback_is_reported() {
    let mut scenario = ScenarioConfig::reference();
    scenario.geometry.rail_radius = 0.015;
    scenario.normal.model = NormalModelKind::ModifiedKikPiotrowski;
    scenario.normal.config.max_root_iterations = 1;
    scenario.load = LoadConfig {
        normal_force: None,
        penetration: Some(5.0e-5),
    };

    let mut pipeline = ContactPipeline::from_scenario(&scenario).unwrap();
    let sink = VecSink::new();
    pipeline.add_sink(Box::new(sink.clone()));
    let outcome = pipeline.run_scenario(&scenario).unwrap();

    assert!(outcome.normal.status.is_degraded());
    assert!(sink.events().iter().any(|e| e.is_warning()));
}

#[test]
fn kinematics_from_scenario() {
    let mut scenario = ScenarioConfig::reference();
    scenario.geometry.yaw_angle = 0.01;
    let pipeline = ContactPipeline::from_scenario(&scenario).unwrap();
    assert_relative_eq!(pipeline.kinematics().yaw_angle, 0.01);
}

// ─── Creep Curve Tests ────────────────────────────────────────

#[test]
fn sweep_values_bounds() {
    assert_eq!(sweep_values(-1.0, 1.0, 3).unwrap(), vec![-1.0, 0.0, 1.0]);
    assert!(sweep_values(0.0, 1.0, 1).is_err());
    assert!(sweep_values(f64::NAN, 1.0, 4).is_err());
}

#[test]
fn creep_curve_is_antisymmetric() {
    let scenario = ScenarioConfig::reference();
    let mut pipeline = ContactPipeline::from_scenario(&scenario).unwrap();
    let values = sweep_values(-0.01, 0.01, 5).unwrap();
    let curve = pipeline
        .creep_curve(
            NormalLoad::Force(1.0e5),
            &Creepage::default(),
            CreepageAxis::Longitudinal,
            &values,
        )
        .unwrap();

    assert_eq!(curve.points.len(), 5);
    assert_relative_eq!(curve.normal_force, 1.0e5);
    for (point, value) in curve.points.iter().zip(&values) {
        assert_eq!(point.creepage, *value);
        assert!(point.utilisation < 1.1);
    }
    assert_eq!(curve.points[2].fx, 0.0);
    assert_relative_eq!(curve.points[2].adhesion_area, 1.0);
    assert_eq!(curve.points[0].fx, -curve.points[4].fx);
    assert!(curve.peak().is_some());
}

#[test]
fn creep_curve_csv() {
    let scenario = ScenarioConfig::reference();
    let mut pipeline = ContactPipeline::from_scenario(&scenario).unwrap();
    let curve = pipeline
        .creep_curve(
            NormalLoad::Force(1.0e5),
            &Creepage::default(),
            CreepageAxis::Lateral,
            &sweep_values(0.0, 0.005, 4).unwrap(),
        )
        .unwrap();

    let csv = curve.to_csv();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], CreepCurvePoint::to_csv_header());
    assert_eq!(lines[1].split(',').count(), 6);

    let path = std::env::temp_dir().join("railcontact_creep_curve_test.csv");
    curve.write_csv(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, csv);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn creep_curve_needs_tangential_model() {
    let scenario = ScenarioConfig::reference();
    let materials = scenario.material_pair().unwrap();
    let mut pipeline = ContactPipeline::new(scenario.normal_model(&materials).unwrap());
    let err = pipeline
        .creep_curve(
            NormalLoad::Force(1.0e5),
            &Creepage::default(),
            CreepageAxis::Spin,
            &[0.0, 1.0],
        )
        .unwrap_err();
    assert!(matches!(err, ContactError::InvalidConfig(_)));
}

#[test]
fn wear_section_defaults() {
    let section = WearSection::default();
    assert_relative_eq!(section.sliding_distance, 1000.0);
    assert!(section.density.is_none());
}
