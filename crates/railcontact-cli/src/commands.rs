//! CLI command implementations.

use railcontact_material::MaterialDatabase;
use railcontact_pipeline::{sweep_values, ContactPipeline, ScenarioConfig};
use railcontact_tangential::CreepageAxis;
use railcontact_telemetry::TracingSink;

fn load_scenario(path: Option<&str>) -> Result<ScenarioConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ScenarioConfig::from_file(path)?),
        None => Ok(ScenarioConfig::reference()),
    }
}

/// Solve one scenario and print a summary.
pub fn solve(config_path: Option<&str>, json_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = load_scenario(config_path)?;
    let mut pipeline = ContactPipeline::from_scenario(&scenario)?;
    pipeline.add_sink(Box::new(TracingSink::default()));

    let outcome = pipeline.run_scenario(&scenario)?;
    let normal = &outcome.normal;
    let patch = &normal.patch;

    println!("Contact Solution: {}", scenario.name);
    println!("══════════════════════════════");
    println!();
    println!("Normal model:     {}", pipeline.normal_model().name());
    println!("  Normal force:   {:.4e} N", normal.normal_force);
    println!("  Penetration:    {:.4e} m", normal.penetration);
    println!("  Semi-axes:      a = {:.4e} m, b = {:.4e} m", patch.a, patch.b);
    println!("  Area:           {:.4e} m²", patch.area);
    println!("  Pressure:       mean {:.4e} Pa, max {:.4e} Pa", patch.mean_pressure, patch.max_pressure);
    if let Some(ellipticity) = &patch.ellipticity {
        println!("  Axis ratio:     {:.3} (non-elliptical: {})", ellipticity.semi_axes_ratio, ellipticity.non_elliptical);
    }
    if normal.status.is_degraded() {
        println!("  Status:         {:?}", normal.status);
    }

    if let Some(tangential) = &outcome.tangential {
        println!();
        println!("Tangential solver: {}", pipeline.tangential_model().map_or("", |t| t.name()));
        println!("  Fx:             {:.4e} N", tangential.forces.x);
        println!("  Fy:             {:.4e} N", tangential.forces.y);
        println!("  |F|:            {:.4e} N", tangential.force_magnitude());
        println!("  Mz:             {:.4e} N·m", tangential.moment);
        println!("  Adhesion:       {:.1} %", tangential.adhesion_area * 100.0);
        println!("  Utilisation:    {:.3}", tangential.utilisation);
    }

    if let Some(wear) = &outcome.wear {
        println!();
        println!("Wear:");
        println!("  Tγ:             {:.3} N/mm²", wear.mean_t_gamma);
        println!("  Rate:           {:.3} µg/(m·mm²)", wear.mean_rate);
        println!("  Depth:          {:.4e} mm", wear.mean_depth);
        println!("  Volume:         {:.4e} mm³", wear.volume);
    }

    if let Some(path) = json_path {
        std::fs::write(path, serde_json::to_string_pretty(&outcome)?)?;
        println!();
        println!("Outcome written to: {path}");
    }

    Ok(())
}

/// Sweep one creepage component and output the creep curve as CSV.
pub fn sweep(
    config_path: Option<&str>,
    axis: &str,
    from: f64,
    to: f64,
    steps: usize,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = load_scenario(config_path)?;
    let axis: CreepageAxis = axis.parse()?;
    let values = sweep_values(from, to, steps)?;

    let mut pipeline = ContactPipeline::from_scenario(&scenario)?;
    let curve = pipeline.creep_curve(scenario.load.to_load()?, &scenario.creepage, axis, &values)?;

    tracing::info!(
        scenario = %scenario.name,
        axis = axis.name(),
        points = curve.points.len(),
        "creep curve computed"
    );

    if let Some(path) = output_path {
        curve.write_csv(path)?;
        println!("Creep curve written to: {path}");
    } else {
        print!("{}", curve.to_csv());
    }

    if let Some(peak) = curve.peak() {
        println!(
            "Peak: |F| = {:.4e} N at {} creepage {:.4e}",
            peak.fx.hypot(peak.fy),
            axis.name(),
            peak.creepage
        );
    }

    Ok(())
}

/// List the built-in material grades.
pub fn materials() -> Result<(), Box<dyn std::error::Error>> {
    let db = MaterialDatabase::with_defaults();

    println!("Material Database");
    println!("─────────────────");
    println!();
    println!("{:<12} {:>10} {:>8} {:>10} {:>10}", "name", "E (GPa)", "ν", "G (GPa)", "ρ (kg/m³)");
    for name in db.names() {
        if let Some(props) = db.get(name) {
            println!(
                "{:<12} {:>10.1} {:>8.3} {:>10.2} {:>10.0}",
                name,
                props.youngs_modulus / 1e9,
                props.poisson_ratio,
                props.shear_modulus() / 1e9,
                props.density,
            );
        }
    }

    Ok(())
}

/// Validate a scenario file and the models it names.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Validating scenario: {path}");
    let scenario = ScenarioConfig::from_file(path)?;
    let pipeline = ContactPipeline::from_scenario(&scenario).map_err(|e| {
        println!("❌ Scenario validation failed: {e}");
        e
    })?;
    println!(
        "✅ Scenario '{}' is valid ({} / {}).",
        scenario.name,
        pipeline.normal_model().name(),
        pipeline.tangential_model().map_or("none", |t| t.name()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_scenario(file: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn validate_accepts_good_scenario() {
        let path = write_scenario(
            "railcontact_cli_valid.toml",
            "[load]\nnormal_force = 80000.0\n",
        );
        assert!(validate(path.to_str().unwrap()).is_ok());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn validate_rejects_unknown_material() {
        let path = write_scenario(
            "railcontact_cli_bad_material.toml",
            "[materials]\nwheel = \"unobtainium\"\n\n[load]\nnormal_force = 80000.0\n",
        );
        assert!(validate(path.to_str().unwrap()).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn validate_rejects_missing_file() {
        assert!(validate("/nonexistent/railcontact_scenario.toml").is_err());
    }
}
