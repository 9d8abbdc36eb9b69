//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in the model.
//! Model errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Model store error")]
    StoreLockError,

    /// A model file could not be read or parsed.
    #[error("Cannot load model from {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },

    /// Talking to the external application failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Close the project in the application if it holds the files open".into(),
            ],
            Self::StoreLockError => vec![
                "The model store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ModelLoad { path, .. } => vec![
                format!("Check the TOML syntax of {}", path.display()),
                "Try: raskit presets --format toml to see a valid model layout".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
            Self::Session(e) => e.suggestions(),
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::ModelLoad { .. } => ErrorCategory::Validation,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
            Self::Session(SessionError::ProjectNotFound { .. }) => ErrorCategory::NotFound,
            Self::Session(_) => ErrorCategory::External,
        }
    }
}

/// Failure reported by a controller adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// The automation class is not registered on this machine.
    #[error("automation class '{prog_id}' is not available: {reason}")]
    Unavailable { prog_id: String, reason: String },

    /// The project file passed to `open_project` does not exist.
    #[error("project file not found: {}", path.display())]
    ProjectMissing { path: PathBuf },

    /// The application raised while handling `operation`.
    #[error("{operation} failed: {reason}")]
    Rejected {
        operation: &'static str,
        reason: String,
    },
}

impl ControllerError {
    pub fn rejected(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            operation,
            reason: reason.into(),
        }
    }
}

/// Errors from driving a session with the external application.
///
/// None of these are fatal to the caller: the session stays usable (or
/// cleanly disconnected) after each one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("not connected to the application")]
    NotConnected,

    #[error("no project is open")]
    NoProjectOpen,

    #[error("project file not found: {}", path.display())]
    ProjectNotFound { path: PathBuf },

    #[error("application refused to open {}: {reason}", path.display())]
    OpenFailed { path: PathBuf, reason: String },

    #[error("computation failed: {reason}")]
    ComputeFailed { reason: String },

    #[error("saving the project failed: {reason}")]
    SaveFailed { reason: String },

    #[error("showing the application window failed: {reason}")]
    WindowFailed { reason: String },
}

impl SessionError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotConnected => vec![
                "Check that HEC-RAS is installed and its automation class registered".into(),
                "Set controller.prog_id to match the installed version".into(),
            ],
            Self::NoProjectOpen => vec!["Open a project before computing or saving".into()],
            Self::ProjectNotFound { path } => vec![
                format!("Generate the project first: {}", path.display()),
                "Try: raskit new <NAME>".into(),
            ],
            Self::OpenFailed { .. } => vec![
                "Open the project manually in HEC-RAS to see its own error".into(),
                "Check the project was written for a compatible version".into(),
            ],
            Self::ComputeFailed { .. } => vec![
                "Open the computation window in HEC-RAS for the full log".into(),
                "Retry once the application is idle".into(),
            ],
            Self::SaveFailed { .. } | Self::WindowFailed { .. } => {
                vec!["Check the application is still running".into()]
            }
        }
    }
}
