//! # railcontact-types
//!
//! Shared error types and physical constants for the railcontact
//! wheel/rail contact workspace.
//!
//! This crate has zero domain logic; it defines the vocabulary
//! that all other railcontact crates share.

pub mod constants;
pub mod error;

pub use error::{ContactError, ContactResult};
