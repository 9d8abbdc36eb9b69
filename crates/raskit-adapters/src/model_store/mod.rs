//! Model definition sources.
//!
//! - [`builtin`]: presets compiled into the binary
//! - [`FilesystemModelLoader`]: `*.toml` model files on disk
//! - [`InMemoryModelStore`]: the `ModelStore` port, fed by both

pub mod builtin;
mod loader;
mod memory;

pub use loader::{FilesystemModelLoader, MODELS_DIR_ENV, discover_models};
pub use memory::InMemoryModelStore;
