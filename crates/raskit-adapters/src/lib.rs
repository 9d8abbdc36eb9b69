//! Infrastructure adapters for raskit.
//!
//! This crate implements the ports defined in `raskit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod controller;
pub mod filesystem;
pub mod model_store;

// Re-export commonly used adapters
pub use controller::{RehearsalCall, RehearsalConnector, UnavailableConnector};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use model_store::{FilesystemModelLoader, InMemoryModelStore};
