//! # railcontact-normal
//!
//! Normal contact between wheel and rail.
//!
//! Given principal curvatures and either a normal force or a
//! penetration, a [`NormalContactModel`] produces the contact patch
//! (semi-axes, area, pressure field) together with the complementary
//! load quantity.
//!
//! Two strategies are provided, selected at construction time:
//! - [`KikPiotrowski`]: closed-form elliptical patch, exactly invertible
//! - [`ModifiedKikPiotrowski`]: corrects strongly non-elliptical patches;
//!   its force-from-penetration inverse is solved numerically

pub mod config;
pub mod curvature;
pub mod kik_piotrowski;
pub mod modified;
pub mod patch;
pub mod strategy;

pub use config::NormalConfig;
pub use curvature::{CircularProfiles, CurvatureProvider, CurvaturePair, FixedCurvatures};
pub use kik_piotrowski::KikPiotrowski;
pub use modified::ModifiedKikPiotrowski;
pub use patch::{ContactPatch, Ellipticity, PatchShape};
pub use strategy::{ForceEstimate, NormalContactModel, NormalLoad, NormalSolution, SolveStatus};
