//! Creep curves: tangential force against one creepage component.

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use railcontact_math::linspace;
use railcontact_normal::NormalLoad;
use railcontact_tangential::{Creepage, CreepageAxis};
use railcontact_telemetry::{ContactEvent, EventKind};
use railcontact_types::{ContactError, ContactResult};

use crate::pipeline::ContactPipeline;

/// One point of a creep curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreepCurvePoint {
    /// Value of the swept creepage component.
    pub creepage: f64,
    /// Longitudinal force (N).
    pub fx: f64,
    /// Lateral force (N).
    pub fy: f64,
    /// Spin moment (N·m).
    pub moment: f64,
    pub adhesion_area: f64,
    /// `|F| / (μN)`.
    pub utilisation: f64,
}

impl CreepCurvePoint {
    /// CSV header matching [`to_csv_row`](Self::to_csv_row).
    pub fn to_csv_header() -> String {
        "creepage,fx_n,fy_n,moment_nm,adhesion_area,utilisation".to_string()
    }

    /// Format this point as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{:.6e},{:.6e},{:.6e},{:.6e},{:.6},{:.6}",
            self.creepage, self.fx, self.fy, self.moment, self.adhesion_area, self.utilisation,
        )
    }
}

/// A swept creep curve at a fixed normal solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreepCurve {
    pub axis: CreepageAxis,
    /// Normal force the curve was computed at (N).
    pub normal_force: f64,
    pub points: Vec<CreepCurvePoint>,
}

impl CreepCurve {
    /// Complete CSV document, header first.
    pub fn to_csv(&self) -> String {
        let mut csv = CreepCurvePoint::to_csv_header();
        for point in &self.points {
            csv.push('\n');
            csv.push_str(&point.to_csv_row());
        }
        csv.push('\n');
        csv
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> ContactResult<()> {
        std::fs::write(path, self.to_csv())?;
        Ok(())
    }

    /// Point with the largest force magnitude.
    pub fn peak(&self) -> Option<&CreepCurvePoint> {
        self.points
            .iter()
            .max_by(|a, b| a.fx.hypot(a.fy).total_cmp(&b.fx.hypot(b.fy)))
    }
}

/// `steps` evenly spaced values from `from` to `to` inclusive.
pub fn sweep_values(from: f64, to: f64, steps: usize) -> ContactResult<Vec<f64>> {
    if steps < 2 {
        return Err(ContactError::InvalidConfig(format!(
            "a sweep needs at least 2 steps, got {steps}"
        )));
    }
    if !(from.is_finite() && to.is_finite()) {
        return Err(ContactError::InvalidConfig("sweep bounds must be finite".into()));
    }
    Ok(linspace(from, to, steps))
}

impl ContactPipeline {
    /// Sweeps one creepage component with the normal problem solved once.
    ///
    /// Other components keep their values from `base`. Points are solved
    /// in parallel and returned in the order of `values`.
    pub fn creep_curve(
        &mut self,
        load: NormalLoad,
        base: &Creepage,
        axis: CreepageAxis,
        values: &[f64],
    ) -> ContactResult<CreepCurve> {
        let model = self.tangential.as_deref().ok_or_else(|| {
            ContactError::InvalidConfig("creep curves need a tangential model".into())
        })?;

        let normal = self.solve_normal(load)?;
        let patch = &normal.patch;
        let normal_force = normal.normal_force;

        let points = values
            .par_iter()
            .map(|&value| {
                let creepage = base.with_component(axis, value);
                let solution = model.solve(patch, &creepage, normal_force)?;
                Ok(CreepCurvePoint {
                    creepage: value,
                    fx: solution.forces.x,
                    fy: solution.forces.y,
                    moment: solution.moment,
                    adhesion_area: solution.adhesion_area,
                    utilisation: solution.utilisation,
                })
            })
            .collect::<ContactResult<Vec<_>>>()?;

        let curve = CreepCurve {
            axis,
            normal_force,
            points,
        };

        self.emit_normal(&normal);
        let summary = EventKind::custom(
            "creep_curve",
            &(axis.name(), curve.points.len(), curve.peak().copied()),
        )?;
        let sequence = self.runs();
        self.bus_mut().emit(ContactEvent::new(sequence, summary));
        self.flush_events();

        tracing::debug!(axis = axis.name(), points = curve.points.len(), "creep curve computed");
        Ok(curve)
    }
}
