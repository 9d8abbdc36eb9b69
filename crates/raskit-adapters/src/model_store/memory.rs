//! In-memory model store with built-in presets.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use raskit_core::{
    application::{ApplicationError, ports::ModelStore},
    domain::{DomainError, DomainValidator as validator, ModelDefinition},
    error::RasResult,
};

use crate::model_store::{builtin, discover_models};

/// Thread-safe in-memory model store, keyed by model name.
#[derive(Clone, Default)]
pub struct InMemoryModelStore {
    inner: Arc<RwLock<BTreeMap<String, ModelDefinition>>>,
}

impl InMemoryModelStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in presets loaded.
    pub fn with_builtin() -> RasResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Built-in presets plus any model files discovered on disk. A file
    /// model with the same name as a preset replaces it.
    pub fn with_discovered() -> RasResult<Self> {
        let store = Self::with_builtin()?;
        for model in discover_models()? {
            store.insert(model)?;
        }
        Ok(store)
    }

    pub fn load_builtin(&self) -> RasResult<()> {
        for model in builtin::all_models()? {
            self.insert(model)?;
        }
        Ok(())
    }

    /// Insert or replace a model after validating it.
    pub fn insert(&self, model: ModelDefinition) -> RasResult<()> {
        validator::validate_model(&model)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.contains_key(&model.name) {
            debug!(name = %model.name, "replacing model");
        }
        inner.insert(model.name.clone(), model);
        Ok(())
    }

    /// Get the number of models.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ModelStore for InMemoryModelStore {
    fn get(&self, name: &str) -> RasResult<ModelDefinition> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::ModelNotFound(name.to_string()).into())
    }

    fn list(&self) -> RasResult<Vec<ModelDefinition>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }
}
