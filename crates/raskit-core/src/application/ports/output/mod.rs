//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `raskit-adapters` crate provides implementations.

use std::path::Path;

use crate::application::ControllerError;
use crate::domain::{ModelDefinition, RawValue};
use crate::error::RasResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `raskit_adapters::filesystem::LocalFilesystem` (production)
/// - `raskit_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> RasResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> RasResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for model definition lookup.
///
/// Implemented by:
/// - `raskit_adapters::model_store::InMemoryModelStore` (built-in presets)
/// - `raskit_adapters::model_store::FilesystemModelLoader` (feeds the store
///   from `*.toml` files)
#[cfg_attr(test, mockall::automock)]
pub trait ModelStore: Send + Sync {
    /// Get a model by name.
    fn get(&self, name: &str) -> RasResult<ModelDefinition>;

    /// List all available models, sorted by name.
    fn list(&self) -> RasResult<Vec<ModelDefinition>>;
}

/// Port for acquiring a handle on the external application.
///
/// Implemented by:
/// - `raskit_adapters::controller::UnavailableConnector` (no binding)
/// - `raskit_adapters::controller::RehearsalConnector` (in-memory stand-in)
#[cfg_attr(test, mockall::automock)]
pub trait RasConnector: Send + Sync {
    /// Instantiate the automation class `prog_id`.
    fn connect(&self, prog_id: &str) -> Result<Box<dyn RasController>, ControllerError>;
}

/// Port for one live automation handle.
///
/// Calls map one-to-one onto the application's automation methods. The
/// compute result is passed through untyped; the session interprets it.
#[cfg_attr(test, mockall::automock)]
pub trait RasController: Send {
    fn open_project(&mut self, path: &Path) -> Result<(), ControllerError>;

    fn compute_current_plan(&mut self) -> Result<RawValue, ControllerError>;

    fn save_project(&mut self) -> Result<(), ControllerError>;

    fn show_window(&mut self) -> Result<(), ControllerError>;

    fn quit(&mut self) -> Result<(), ControllerError>;
}
