//! # railcontact-wear
//!
//! Wear estimation from the frictional power dissipated in the contact.
//!
//! A [`WearModel`] maps the frictional power density Tγ (N/mm²) to a
//! wear rate (μg/(m·mm²)). The [`WearEstimator`] evaluates it over the
//! traction field of a tangential solution and converts rates into
//! depth and volume for a given sliding distance.

pub mod config;
pub mod estimate;
pub mod traits;
pub mod usfd;

pub use config::WearConfig;
pub use estimate::{global_t_gamma, local_t_gamma, WearEstimate, WearEstimator};
pub use traits::WearModel;
pub use usfd::{UsfdCoefficients, UsfdWear, WearRegime};
