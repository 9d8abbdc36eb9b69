//! Model Service - model lookup and listing.
//!
//! Separated from ProjectService so the CLI can list presets without a
//! filesystem adapter.

use crate::{
    application::ports::ModelStore,
    domain::ModelDefinition,
    error::RasResult,
};

/// Summary of a model for display purposes.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub description: String,
    pub river: String,
    pub reach: String,
    pub units: String,
    pub points: usize,
    pub flow_rate: f64,
    pub profile: String,
}

impl From<&ModelDefinition> for ModelInfo {
    fn from(m: &ModelDefinition) -> Self {
        Self {
            name: m.name.clone(),
            description: m.description.clone().unwrap_or_default(),
            river: m.river.clone(),
            reach: m.reach.clone(),
            units: m.units.to_string(),
            points: m.cross_section.len(),
            flow_rate: m.flow.rate,
            profile: m.flow.profile_name.clone(),
        }
    }
}

/// Service for model lookup.
pub struct ModelService {
    store: Box<dyn ModelStore>,
}

impl ModelService {
    pub fn new(store: Box<dyn ModelStore>) -> Self {
        Self { store }
    }

    /// Get a model by name.
    pub fn get(&self, name: &str) -> RasResult<ModelDefinition> {
        self.store.get(name)
    }

    /// List all models.
    pub fn list(&self) -> RasResult<Vec<ModelInfo>> {
        Ok(self.store.list()?.iter().map(ModelInfo::from).collect())
    }

    /// Full definitions of every model, e.g. to export them as files.
    pub fn definitions(&self) -> RasResult<Vec<ModelDefinition>> {
        self.store.list()
    }
}
