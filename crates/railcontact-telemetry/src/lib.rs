//! # railcontact-telemetry
//!
//! Event bus for contact-solver telemetry. The pipeline emits
//! structured events (normal and tangential solves, root-find
//! fallbacks, linear corrections, wear) that pluggable sinks consume.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{ContactEvent, EventKind};
pub use sinks::{EventSink, TracingSink, VecSink};
