//! # railcontact-pipeline
//!
//! Composition layer over the contact models.
//!
//! A [`ScenarioConfig`] (TOML) names the geometry, materials, models,
//! load and creepage of one contact. [`ContactPipeline`] builds the
//! models from it, runs curvature → normal → tangential → wear, emits
//! telemetry, and sweeps creep curves for export as CSV.

pub mod pipeline;
pub mod scenario;
pub mod sweep;

pub use pipeline::{ContactPipeline, Kinematics, PipelineOutcome, TotalForces};
pub use scenario::{
    GeometryConfig, LoadConfig, MaterialsConfig, NormalModelKind, NormalSection, ScenarioConfig,
    TangentialSection, TangentialSolverKind, WearSection,
};
pub use sweep::{sweep_values, CreepCurve, CreepCurvePoint};
