//! Filesystem-based model loader.
//!
//! Discovers `*.toml` and `*.json` model files under a directory and parses
//! them into [`ModelDefinition`]s.
//!
//! # Directory layout expected
//!
//! ```text
//! models/
//! ├── canal.toml
//! ├── survey-2024/
//! │   ├── upper_reach.toml
//! │   └── lower_reach.json
//! └── notes.md              ← ignored
//! ```
//!
//! A file that omits `name` takes its file stem as the model name. Files
//! that fail to parse or validate are skipped with a `WARN` log rather than
//! failing the whole batch.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use raskit_core::{
    application::ApplicationError,
    domain::{DomainValidator as validator, ModelDefinition},
    error::RasResult,
};

/// Environment variable naming an extra models directory.
pub const MODELS_DIR_ENV: &str = "RASKIT_MODELS_DIR";

/// Subdirectories deeper than this are not searched.
const MAX_DEPTH: usize = 3;

/// File extensions recognised as model files.
const MODEL_EXTENSIONS: &[&str] = &["toml", "json"];

/// Loads model files from one directory tree.
pub struct FilesystemModelLoader {
    models_dir: PathBuf,
}

impl FilesystemModelLoader {
    /// Create a loader pointed at `models_dir`.
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
        }
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Load every valid model found under the directory.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::ModelLoad`] if the directory does not
    /// exist. Individual bad files are skipped.
    #[instrument(skip(self), fields(dir = %self.models_dir.display()))]
    pub fn load_all(&self) -> RasResult<Vec<ModelDefinition>> {
        if !self.models_dir.is_dir() {
            return Err(ApplicationError::ModelLoad {
                path: self.models_dir.clone(),
                reason: "models directory not found".into(),
            }
            .into());
        }

        let mut models = Vec::new();

        for entry in WalkDir::new(&self.models_dir)
            .min_depth(1)
            .max_depth(MAX_DEPTH)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_model_file(path) {
                continue;
            }

            match Self::load_file(path) {
                Ok(model) => {
                    debug!(name = %model.name, path = %path.display(), "loaded model");
                    models.push(model);
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "skipping model file due to load error"
                    );
                }
            }
        }

        debug!(count = models.len(), "finished loading models");
        Ok(models)
    }

    /// Parse and validate one model file, TOML or JSON by extension.
    pub fn load_file(path: &Path) -> RasResult<ModelDefinition> {
        let load_error = |reason: String| ApplicationError::ModelLoad {
            path: path.to_path_buf(),
            reason,
        };

        let raw = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let model = if path.extension().is_some_and(|ext| ext == "json") {
            parse_json(&raw, stem)
        } else {
            parse_toml(&raw, stem)
        }
        .map_err(load_error)?;

        validator::validate_model(&model)?;
        Ok(model)
    }
}

fn is_model_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MODEL_EXTENSIONS.contains(&ext))
}

fn parse_toml(raw: &str, stem: String) -> Result<ModelDefinition, String> {
    let mut table: toml::Table = toml::from_str(raw).map_err(|e| e.to_string())?;
    if !table.contains_key("name") {
        table.insert("name".into(), toml::Value::String(stem));
    }

    let normalized = toml::to_string(&table).map_err(|e| e.to_string())?;
    toml::from_str(&normalized).map_err(|e| e.to_string())
}

fn parse_json(raw: &str, stem: String) -> Result<ModelDefinition, String> {
    let mut value: serde_json::Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| "expected a JSON object at the top level".to_string())?;
    object
        .entry("name")
        .or_insert_with(|| serde_json::Value::String(stem));

    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Load models from `$RASKIT_MODELS_DIR` or `./models`, whichever exists
/// first. Returns an empty list when neither does.
#[instrument]
pub fn discover_models() -> RasResult<Vec<ModelDefinition>> {
    for candidate in candidate_paths() {
        if !candidate.is_dir() {
            debug!(path = %candidate.display(), "path does not exist, skipping");
            continue;
        }

        let models = FilesystemModelLoader::new(&candidate).load_all()?;
        info!(
            path = %candidate.display(),
            count = models.len(),
            "model files loaded"
        );
        return Ok(models);
    }

    debug!("no models directory found");
    Ok(Vec::new())
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Ok(dir) = std::env::var(MODELS_DIR_ENV) {
        paths.push(PathBuf::from(dir));
    }
    paths.push(PathBuf::from("models"));
    paths
}
