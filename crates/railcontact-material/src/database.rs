//! Material database with wheel and rail steel grades.
//!
//! The built-in grades all share the elastic constants of steel; they
//! differ in name so that wear coefficients and reports can be keyed
//! on the grade.

use std::collections::HashMap;

use crate::properties::ElasticProperties;

/// A named collection of material presets.
///
/// Materials are looked up by name (e.g., "R8T", "UIC60_900A").
/// Custom materials can be registered at runtime.
#[derive(Debug, Clone)]
pub struct MaterialDatabase {
    materials: HashMap<String, ElasticProperties>,
}

impl MaterialDatabase {
    /// Creates a new database with the 4 built-in steel grades.
    pub fn with_defaults() -> Self {
        let mut db = Self::empty();

        db.register(ElasticProperties::steel("R8T"));
        db.register(ElasticProperties::steel("ER7"));
        db.register(ElasticProperties::steel("UIC60_900A"));
        db.register(ElasticProperties::steel("R260"));

        db
    }

    /// Creates an empty database.
    pub fn empty() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Registers a material. Overwrites if the name already exists.
    pub fn register(&mut self, props: ElasticProperties) {
        self.materials.insert(props.name.clone(), props);
    }

    /// Looks up a material by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&ElasticProperties> {
        self.materials.get(name)
    }

    /// Returns all registered material names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.materials.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if the database is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialDatabase {
    fn default() -> Self {
        Self::with_defaults()
    }
}
