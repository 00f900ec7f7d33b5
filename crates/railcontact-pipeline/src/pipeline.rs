//! The contact pipeline: curvature → normal model → tangential model →
//! wear, with telemetry.

use serde::{Deserialize, Serialize};

use railcontact_normal::{NormalContactModel, NormalLoad, NormalSolution, SolveStatus};
use railcontact_tangential::{Creepage, TangentialContactModel, TangentialSolution};
use railcontact_telemetry::{ContactEvent, EventBus, EventKind, EventSink};
use railcontact_types::ContactResult;
use railcontact_wear::{WearEstimate, WearEstimator};

use crate::scenario::ScenarioConfig;

/// Wheelset position that selects the curvatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    /// Yaw angle (rad).
    pub yaw_angle: f64,
    /// Lateral displacement (m).
    pub lateral_displacement: f64,
}

/// Resultant contact forces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalForces {
    /// Normal force (N).
    pub normal: f64,
    /// Longitudinal creep force (N).
    pub longitudinal: f64,
    /// Lateral creep force (N).
    pub lateral: f64,
    /// Spin moment (N·m).
    pub spin_moment: f64,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub normal: NormalSolution,
    pub tangential: Option<TangentialSolution>,
    pub wear: Option<WearEstimate>,
    pub total_forces: TotalForces,
}

/// Composes the contact models for repeated solves.
pub struct ContactPipeline {
    pub(crate) normal: Box<dyn NormalContactModel>,
    pub(crate) tangential: Option<Box<dyn TangentialContactModel>>,
    wear: Option<WearEstimator>,
    pub(crate) kinematics: Kinematics,
    bus: EventBus,
    sequence: u64,
}

impl ContactPipeline {
    /// Pipeline with only a normal model.
    pub fn new(normal: Box<dyn NormalContactModel>) -> Self {
        Self {
            normal,
            tangential: None,
            wear: None,
            kinematics: Kinematics::default(),
            bus: EventBus::new(),
            sequence: 0,
        }
    }

    pub fn with_tangential(mut self, tangential: Box<dyn TangentialContactModel>) -> Self {
        self.tangential = Some(tangential);
        self
    }

    pub fn with_wear(mut self, wear: WearEstimator) -> Self {
        self.wear = Some(wear);
        self
    }

    pub fn with_kinematics(mut self, kinematics: Kinematics) -> Self {
        self.kinematics = kinematics;
        self
    }

    /// Builds every model named by a scenario.
    pub fn from_scenario(scenario: &ScenarioConfig) -> ContactResult<Self> {
        scenario.validate()?;
        let materials = scenario.material_pair()?;
        let mut pipeline = Self::new(scenario.normal_model(&materials)?)
            .with_tangential(scenario.tangential_model(&materials)?)
            .with_kinematics(Kinematics {
                yaw_angle: scenario.geometry.yaw_angle,
                lateral_displacement: scenario.geometry.lateral_displacement,
            });
        if let Some(config) = scenario.wear_config(&materials) {
            pipeline = pipeline.with_wear(WearEstimator::from_config(&config)?);
        }
        tracing::debug!(
            scenario = %scenario.name,
            normal = pipeline.normal.name(),
            tangential = pipeline.tangential.as_ref().map(|t| t.name()),
            wear = pipeline.wear.is_some(),
            "pipeline built"
        );
        Ok(pipeline)
    }

    /// Registers a telemetry sink.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.bus.add_sink(sink);
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn normal_model(&self) -> &dyn NormalContactModel {
        self.normal.as_ref()
    }

    pub fn tangential_model(&self) -> Option<&dyn TangentialContactModel> {
        self.tangential.as_deref()
    }

    pub fn kinematics(&self) -> Kinematics {
        self.kinematics
    }

    /// Number of completed runs.
    pub fn runs(&self) -> u64 {
        self.sequence
    }

    /// Solves the normal problem at the pipeline's kinematics.
    pub fn solve_normal(&self, load: NormalLoad) -> ContactResult<NormalSolution> {
        self.normal.solve(
            load,
            self.kinematics.yaw_angle,
            self.kinematics.lateral_displacement,
        )
    }

    /// Runs every configured stage for one load and creepage.
    pub fn run(&mut self, load: NormalLoad, creepage: &Creepage) -> ContactResult<PipelineOutcome> {
        let normal = self.solve_normal(load)?;
        self.emit_normal(&normal);

        let tangential = match &self.tangential {
            Some(model) => Some(model.solve(&normal.patch, creepage, normal.normal_force)?),
            None => None,
        };
        if let Some(solution) = &tangential {
            self.emit_tangential(solution);
        }

        let wear = match (&self.wear, &tangential) {
            (Some(estimator), Some(solution)) => Some(estimator.estimate(&normal.patch, solution)),
            _ => None,
        };
        if let Some(estimate) = &wear {
            self.emit(EventKind::WearEstimated {
                t_gamma: estimate.mean_t_gamma,
                rate: estimate.mean_rate,
                volume: estimate.volume,
            });
        }

        let total_forces = TotalForces {
            normal: normal.normal_force,
            longitudinal: tangential.as_ref().map_or(0.0, |t| t.forces.x),
            lateral: tangential.as_ref().map_or(0.0, |t| t.forces.y),
            spin_moment: tangential.as_ref().map_or(0.0, |t| t.moment),
        };

        self.bus.flush();
        self.sequence += 1;

        Ok(PipelineOutcome {
            normal,
            tangential,
            wear,
            total_forces,
        })
    }

    /// Runs a scenario's own load and creepage.
    pub fn run_scenario(&mut self, scenario: &ScenarioConfig) -> ContactResult<PipelineOutcome> {
        let load = scenario.load.to_load()?;
        self.run(load, &scenario.creepage)
    }

    fn emit(&self, kind: EventKind) {
        self.bus.emit(ContactEvent::new(self.sequence, kind));
    }

    pub(crate) fn emit_normal(&self, normal: &NormalSolution) {
        self.emit(EventKind::NormalSolved {
            model: self.normal.name().to_string(),
            normal_force: normal.normal_force,
            penetration: normal.penetration,
            a: normal.patch.a,
            b: normal.patch.b,
            max_pressure: normal.patch.max_pressure,
            non_elliptical: normal.patch.is_non_elliptical(),
        });
        if let SolveStatus::Fallback {
            iterations,
            residual,
        } = normal.status
        {
            self.emit(EventKind::RootFindFallback {
                penetration: normal.penetration,
                iterations,
                residual,
            });
        }
    }

    fn emit_tangential(&self, solution: &TangentialSolution) {
        let solver = self
            .tangential
            .as_ref()
            .map_or("", |t| t.name())
            .to_string();
        self.emit(EventKind::TangentialSolved {
            solver,
            fx: solution.forces.x,
            fy: solution.forces.y,
            moment: solution.moment,
            adhesion_area: solution.adhesion_area,
        });
        if let Some(correction) = &solution.linear_correction {
            self.emit(EventKind::LinearCorrectionApplied {
                factor_x: correction.factors.x,
                factor_y: correction.factors.y,
            });
        }
    }

    pub(crate) fn flush_events(&mut self) {
        self.bus.flush();
        self.sequence += 1;
    }
}
