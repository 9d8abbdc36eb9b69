//! Application layer for raskit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService, ModelService, RasSession)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! modelling rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ModelInfo, ModelService, ProjectService, RasSession, SessionState};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ModelStore, RasConnector, RasController};

pub use error::{ApplicationError, ControllerError, SessionError};
