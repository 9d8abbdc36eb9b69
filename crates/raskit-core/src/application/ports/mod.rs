//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `raskit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `ModelStore`: Model definition lookup
//!   - `RasConnector` / `RasController`: automation of the external application
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, ModelStore, RasConnector, RasController};

#[cfg(test)]
pub use output::{MockFilesystem, MockModelStore, MockRasConnector, MockRasController};
