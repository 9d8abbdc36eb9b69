//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and print results. No
//! business logic lives here.

use std::path::PathBuf;

use tracing::debug;

use raskit_adapters::{FilesystemModelLoader, InMemoryModelStore};
use raskit_core::{application::ModelService, domain::ModelDefinition};

use crate::{cli::ModelArgs, config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod init;
pub mod new;
pub mod presets;
pub mod run;
pub mod section;

/// Model service over the built-in presets plus any discovered model files.
pub(crate) fn model_service() -> CliResult<ModelService> {
    let store = InMemoryModelStore::with_discovered()?;
    Ok(ModelService::new(Box::new(store)))
}

/// Resolve the model named by `--model`/`--preset` (falling back to
/// `defaults.preset`), renamed to the project name, and the output base
/// directory.
pub(crate) fn resolve_model(
    args: &ModelArgs,
    config: &AppConfig,
) -> CliResult<(ModelDefinition, PathBuf)> {
    let model = match &args.model {
        Some(path) => {
            debug!(path = %path.display(), "loading model file");
            FilesystemModelLoader::load_file(path)?
        }
        None => {
            let preset = args.preset.as_deref().unwrap_or(config.defaults.preset.as_str());
            debug!(preset, "using preset");
            model_service()?.get(preset)?
        }
    };

    let base_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.defaults.output_dir.clone());

    Ok((model.with_name(&args.name), base_dir))
}
