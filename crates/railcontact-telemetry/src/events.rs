//! Contact event types.
//!
//! Events are small value types carrying the headline numbers of each
//! solver stage, enough for monitoring and regression checks.

use serde::{Deserialize, Serialize};

use railcontact_types::{ContactError, ContactResult};

/// An event emitted by the contact pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    /// Index of the pipeline run that produced the event (0-indexed).
    pub sequence: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Normal problem solved.
    NormalSolved {
        model: String,
        /// Normal force (N).
        normal_force: f64,
        /// Penetration (m).
        penetration: f64,
        /// Semi-axes (m).
        a: f64,
        b: f64,
        /// Peak pressure (Pa).
        max_pressure: f64,
        /// Whether the patch was corrected for non-ellipticity.
        non_elliptical: bool,
    },

    /// The penetration inverse did not converge and the elliptical
    /// estimate was used.
    RootFindFallback {
        penetration: f64,
        iterations: u64,
        /// Relative penetration residual.
        residual: f64,
    },

    /// Tangential problem solved.
    TangentialSolved {
        solver: String,
        /// Creep force (N).
        fx: f64,
        fy: f64,
        /// Spin moment (N·m).
        moment: f64,
        /// Adhering fraction of the patch.
        adhesion_area: f64,
    },

    /// Low-creepage linear-theory correction applied to the forces.
    LinearCorrectionApplied { factor_x: f64, factor_y: f64 },

    /// Wear estimated.
    WearEstimated {
        /// Mean Tγ (N/mm²).
        t_gamma: f64,
        /// Mean wear rate (μg/(m·mm²)).
        rate: f64,
        /// Worn volume (mm³).
        volume: f64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl ContactEvent {
    /// Creates a new event for the given run.
    pub fn new(sequence: u64, kind: EventKind) -> Self {
        Self { sequence, kind }
    }

    /// Whether the event reports reduced confidence in a result.
    pub fn is_warning(&self) -> bool {
        matches!(self.kind, EventKind::RootFindFallback { .. })
    }
}

impl EventKind {
    /// Custom event with a JSON-encoded payload.
    pub fn custom<T: Serialize>(label: impl Into<String>, payload: &T) -> ContactResult<Self> {
        let payload =
            serde_json::to_string(payload).map_err(|e| ContactError::Serialization(e.to_string()))?;
        Ok(Self::Custom {
            label: label.into(),
            payload,
        })
    }
}
