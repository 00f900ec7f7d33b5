//! # railcontact-tangential
//!
//! Tangential (creep-force) contact between wheel and rail.
//!
//! Given a solved [`ContactPatch`](railcontact_normal::ContactPatch)
//! and the rigid [`Creepage`]s, a [`TangentialContactModel`] marches
//! the simplified-theory recurrence over the patch and returns the
//! traction field together with its resultants.
//!
//! ## Solvers
//!
//! - [`FastSim`]: full-ellipse flexibility from Kalker's coefficients
//! - [`FaStrip`]: strip flexibility, strip-centre spin and a
//!   low-creepage correction towards linear theory

pub mod coefficients;
pub mod config;
pub mod creepage;
pub mod fastrip;
pub mod fastsim;
pub mod field;
pub mod marching;
pub mod strategy;

pub use coefficients::{Flexibility, KalkerCoefficients};
pub use config::TangentialConfig;
pub use creepage::{Creepage, CreepageAxis};
pub use fastrip::{FaStrip, StripLayout};
pub use fastsim::FastSim;
pub use field::TractionField;
pub use marching::RowMarch;
pub use strategy::{LinearCorrection, TangentialContactModel, TangentialSolution};
