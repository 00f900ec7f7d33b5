//! Scenario configuration: a TOML description of one wheel/rail contact.
//!
//! ```toml
//! name = "tangent_track"
//!
//! [geometry]
//! wheel_radius = 0.46
//! rail_radius = 0.3
//! yaw_angle = 0.0
//!
//! [materials]
//! wheel = "R8T"
//! rail = "UIC60_900A"
//! friction_coefficient = 0.3
//!
//! [normal]
//! model = "modified_kik_piotrowski"
//!
//! [load]
//! normal_force = 100000.0
//!
//! [tangential]
//! solver = "fastrip"
//!
//! [creepage]
//! longitudinal = 0.001
//!
//! [wear]
//! sliding_distance = 1000.0
//! ```
//!
//! Every section except `[load]` has defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use railcontact_material::{ElasticProperties, MaterialDatabase, MaterialPair};
use railcontact_normal::{
    CircularProfiles, CurvatureProvider, CurvaturePair, FixedCurvatures, KikPiotrowski,
    ModifiedKikPiotrowski, NormalConfig, NormalContactModel, NormalLoad,
};
use railcontact_tangential::{
    Creepage, FaStrip, FastSim, TangentialConfig, TangentialContactModel,
};
use railcontact_types::constants::DEFAULT_FRICTION_COEFFICIENT;
use railcontact_types::{ContactError, ContactResult};
use railcontact_wear::WearConfig;

/// Profile geometry at the contact point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Wheel rolling radius (m).
    pub wheel_radius: f64,
    /// Rail head transverse radius (m).
    pub rail_radius: f64,
    /// Curvatures from an external profile analysis; overrides the radii.
    pub curvatures: Option<CurvaturePair>,
    /// Wheelset yaw angle (rad).
    pub yaw_angle: f64,
    /// Lateral wheelset displacement (m).
    pub lateral_displacement: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            wheel_radius: 0.46,
            rail_radius: 0.3,
            curvatures: None,
            yaw_angle: 0.0,
            lateral_displacement: 0.0,
        }
    }
}

impl GeometryConfig {
    pub fn curvature_provider(&self) -> ContactResult<Box<dyn CurvatureProvider>> {
        match self.curvatures {
            Some(pair) => Ok(Box::new(FixedCurvatures(CurvaturePair::new(
                pair.longitudinal,
                pair.lateral,
            )?))),
            None => Ok(Box::new(CircularProfiles::new(
                self.wheel_radius,
                self.rail_radius,
            )?)),
        }
    }
}

/// Wheel and rail grades and the friction between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialsConfig {
    pub wheel: String,
    pub rail: String,
    pub friction_coefficient: f64,
}

impl Default for MaterialsConfig {
    fn default() -> Self {
        Self {
            wheel: "R8T".into(),
            rail: "UIC60_900A".into(),
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
        }
    }
}

fn lookup(database: &MaterialDatabase, name: &str) -> ContactResult<ElasticProperties> {
    database
        .get(name)
        .or_else(|| database.get(&name.trim().replace(' ', "_")))
        .cloned()
        .ok_or_else(|| {
            ContactError::InvalidMaterial(format!(
                "unknown material '{name}' (known: {})",
                database.names().join(", ")
            ))
        })
}

impl MaterialsConfig {
    /// Resolves the grade names against a database.
    pub fn resolve(&self, database: &MaterialDatabase) -> ContactResult<MaterialPair> {
        MaterialPair::new(lookup(database, &self.wheel)?, lookup(database, &self.rail)?)
    }
}

/// Normal contact model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalModelKind {
    #[default]
    KikPiotrowski,
    ModifiedKikPiotrowski,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalSection {
    pub model: NormalModelKind,
    pub config: NormalConfig,
}

/// The prescribed normal load; exactly one field must be set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Normal force (N).
    pub normal_force: Option<f64>,
    /// Penetration (m).
    pub penetration: Option<f64>,
}

impl LoadConfig {
    pub fn to_load(&self) -> ContactResult<NormalLoad> {
        NormalLoad::from_options(self.penetration, self.normal_force)
    }
}

/// Tangential solver selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TangentialSolverKind {
    #[default]
    Fastsim,
    Fastrip,
}

/// Tangential solver selection and overrides.
///
/// Shear modulus and Poisson ratio default to the values derived from
/// the material pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TangentialSection {
    pub solver: TangentialSolverKind,
    pub shear_modulus: Option<f64>,
    pub discretization: Option<usize>,
    pub num_strips: Option<usize>,
    pub linear_theory_threshold: Option<f64>,
}

/// Wear estimation settings; the material names come from `[materials]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WearSection {
    /// Rolled distance (m).
    pub sliding_distance: f64,
    /// Density of the worn body (kg/m³); defaults to the wheel grade's.
    pub density: Option<f64>,
}

impl Default for WearSection {
    fn default() -> Self {
        Self {
            sliding_distance: WearConfig::default().sliding_distance,
            density: None,
        }
    }
}

/// A complete contact scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub materials: MaterialsConfig,
    #[serde(default)]
    pub normal: NormalSection,
    pub load: LoadConfig,
    #[serde(default)]
    pub tangential: TangentialSection,
    #[serde(default)]
    pub creepage: Creepage,
    /// Wear is estimated only when this section is present.
    #[serde(default)]
    pub wear: Option<WearSection>,
}

fn default_name() -> String {
    "scenario".into()
}

impl ScenarioConfig {
    /// 100 kN on a 0.46 m wheel and a 0.3 m rail head, 0.1 % longitudinal
    /// creepage, FASTSIM.
    pub fn reference() -> Self {
        Self {
            name: "reference".into(),
            geometry: GeometryConfig::default(),
            materials: MaterialsConfig::default(),
            normal: NormalSection::default(),
            load: LoadConfig {
                normal_force: Some(1.0e5),
                penetration: None,
            },
            tangential: TangentialSection::default(),
            creepage: Creepage::longitudinal(1.0e-3),
            wear: None,
        }
    }

    pub fn from_toml_str(source: &str) -> ContactResult<Self> {
        let scenario: Self =
            toml::from_str(source).map_err(|e| ContactError::Serialization(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ContactResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> ContactResult<String> {
        toml::to_string_pretty(self).map_err(|e| ContactError::Serialization(e.to_string()))
    }

    /// Checks the parts that can be checked without building models.
    pub fn validate(&self) -> ContactResult<()> {
        self.load.to_load()?;
        self.normal.config.validate()?;
        self.creepage.validate()?;
        if !(self.materials.friction_coefficient.is_finite()
            && self.materials.friction_coefficient >= 0.0)
        {
            return Err(ContactError::InvalidConfig(format!(
                "friction_coefficient must be non-negative, got {}",
                self.materials.friction_coefficient
            )));
        }
        Ok(())
    }

    /// Material pair from the built-in database.
    pub fn material_pair(&self) -> ContactResult<MaterialPair> {
        self.materials.resolve(&MaterialDatabase::with_defaults())
    }

    pub fn normal_model(&self, materials: &MaterialPair) -> ContactResult<Box<dyn NormalContactModel>> {
        let curvature = self.geometry.curvature_provider()?;
        let config = self.normal.config.clone();
        Ok(match self.normal.model {
            NormalModelKind::KikPiotrowski => Box::new(KikPiotrowski::new(curvature, materials, config)?),
            NormalModelKind::ModifiedKikPiotrowski => {
                Box::new(ModifiedKikPiotrowski::new(curvature, materials, config)?)
            }
        })
    }

    pub fn tangential_config(&self, materials: &MaterialPair) -> TangentialConfig {
        let section = &self.tangential;
        let defaults = TangentialConfig::from_materials(materials, self.materials.friction_coefficient);
        TangentialConfig {
            shear_modulus: section.shear_modulus.unwrap_or(defaults.shear_modulus),
            discretization: section.discretization.unwrap_or(defaults.discretization),
            num_strips: section.num_strips.unwrap_or(defaults.num_strips),
            linear_theory_threshold: section
                .linear_theory_threshold
                .unwrap_or(defaults.linear_theory_threshold),
            ..defaults
        }
    }

    pub fn tangential_model(
        &self,
        materials: &MaterialPair,
    ) -> ContactResult<Box<dyn TangentialContactModel>> {
        let config = self.tangential_config(materials);
        Ok(match self.tangential.solver {
            TangentialSolverKind::Fastsim => Box::new(FastSim::new(config)?),
            TangentialSolverKind::Fastrip => Box::new(FaStrip::new(config)?),
        })
    }

    /// Wear settings, if wear estimation is requested.
    pub fn wear_config(&self, materials: &MaterialPair) -> Option<WearConfig> {
        self.wear.as_ref().map(|section| WearConfig {
            wheel_material: self.materials.wheel.clone(),
            rail_material: self.materials.rail.clone(),
            density: section.density.unwrap_or(materials.wheel.density),
            sliding_distance: section.sliding_distance,
        })
    }
}
