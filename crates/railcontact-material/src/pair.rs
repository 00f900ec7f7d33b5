//! Wheel/rail material combination.

use serde::{Deserialize, Serialize};

use railcontact_types::ContactResult;

use crate::properties::ElasticProperties;

/// The two bodies in contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPair {
    pub wheel: ElasticProperties,
    pub rail: ElasticProperties,
}

impl MaterialPair {
    /// Creates a validated pair.
    pub fn new(wheel: ElasticProperties, rail: ElasticProperties) -> ContactResult<Self> {
        wheel.validate()?;
        rail.validate()?;
        Ok(Self { wheel, rail })
    }

    /// Steel on steel with default properties.
    pub fn steel() -> Self {
        Self {
            wheel: ElasticProperties::steel("wheel_steel"),
            rail: ElasticProperties::steel("rail_steel"),
        }
    }

    /// Equivalent modulus `E* = 1 / ((1-ν₁²)/E₁ + (1-ν₂²)/E₂)`.
    pub fn equivalent_modulus(&self) -> f64 {
        1.0 / (self.wheel.compliance() + self.rail.compliance())
    }

    /// Combined shear modulus `2G₁G₂ / (G₁ + G₂)`.
    pub fn combined_shear_modulus(&self) -> f64 {
        let g1 = self.wheel.shear_modulus();
        let g2 = self.rail.shear_modulus();
        2.0 * g1 * g2 / (g1 + g2)
    }

    /// Arithmetic mean of the two Poisson ratios.
    pub fn mean_poisson_ratio(&self) -> f64 {
        0.5 * (self.wheel.poisson_ratio + self.rail.poisson_ratio)
    }
}
