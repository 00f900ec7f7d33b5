//! Rigid creepages of the wheel relative to the rail.

use serde::{Deserialize, Serialize};

use railcontact_math::DVec2;
use railcontact_types::{ContactError, ContactResult};

/// Rolling creepages: longitudinal ξ and lateral η (dimensionless) and
/// spin φ (1/m).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creepage {
    pub longitudinal: f64,
    pub lateral: f64,
    pub spin: f64,
}

/// One component of a [`Creepage`], used to sweep creep curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreepageAxis {
    Longitudinal,
    Lateral,
    Spin,
}

impl CreepageAxis {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Longitudinal => "longitudinal",
            Self::Lateral => "lateral",
            Self::Spin => "spin",
        }
    }
}

impl std::str::FromStr for CreepageAxis {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "longitudinal" | "x" => Ok(Self::Longitudinal),
            "lateral" | "y" => Ok(Self::Lateral),
            "spin" => Ok(Self::Spin),
            other => Err(ContactError::InvalidConfig(format!(
                "unknown creepage axis '{other}'"
            ))),
        }
    }
}

impl Creepage {
    pub fn new(longitudinal: f64, lateral: f64, spin: f64) -> Self {
        Self {
            longitudinal,
            lateral,
            spin,
        }
    }

    /// Pure longitudinal creepage.
    pub fn longitudinal(value: f64) -> Self {
        Self::new(value, 0.0, 0.0)
    }

    /// Pure lateral creepage.
    pub fn lateral(value: f64) -> Self {
        Self::new(0.0, value, 0.0)
    }

    /// Value of one component.
    pub fn component(&self, axis: CreepageAxis) -> f64 {
        match axis {
            CreepageAxis::Longitudinal => self.longitudinal,
            CreepageAxis::Lateral => self.lateral,
            CreepageAxis::Spin => self.spin,
        }
    }

    /// Copy with one component replaced.
    pub fn with_component(mut self, axis: CreepageAxis, value: f64) -> Self {
        match axis {
            CreepageAxis::Longitudinal => self.longitudinal = value,
            CreepageAxis::Lateral => self.lateral = value,
            CreepageAxis::Spin => self.spin = value,
        }
        self
    }

    /// Rigid slip at `(x, y)`: `(ξ - φy, η + φx)`.
    #[inline]
    pub fn rigid_slip(&self, x: f64, y: f64) -> DVec2 {
        DVec2::new(self.longitudinal - self.spin * y, self.lateral + self.spin * x)
    }

    /// `(ξ, η)` as a vector.
    pub fn translational(&self) -> DVec2 {
        DVec2::new(self.longitudinal, self.lateral)
    }

    /// Whether both translational creepages are below `threshold` in magnitude.
    pub fn is_small(&self, threshold: f64) -> bool {
        self.longitudinal.abs() < threshold && self.lateral.abs() < threshold
    }

    /// Rejects non-finite components.
    pub fn validate(&self) -> ContactResult<()> {
        if self.longitudinal.is_finite() && self.lateral.is_finite() && self.spin.is_finite() {
            Ok(())
        } else {
            Err(ContactError::InvalidLoad(format!(
                "creepages must be finite, got {self:?}"
            )))
        }
    }
}
