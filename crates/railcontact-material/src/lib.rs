//! # railcontact-material
//!
//! Elastic material properties of wheel and rail steels.
//!
//! ## Design
//!
//! [`ElasticProperties`] describes one body. A [`MaterialPair`] combines
//! the wheel and rail into the equivalent quantities the contact solvers
//! consume (equivalent modulus, combined shear modulus).
//!
//! The [`MaterialDatabase`] stores named steel grades so scenarios can
//! refer to materials by name (e.g. `"R8T"`, `"UIC60_900A"`).

pub mod database;
pub mod pair;
pub mod properties;

pub use database::MaterialDatabase;
pub use pair::MaterialPair;
pub use properties::ElasticProperties;
