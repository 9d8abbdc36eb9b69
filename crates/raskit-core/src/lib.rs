//! raskit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for raskit, a tool
//! that generates HEC-RAS text projects from a few numeric parameters and
//! drives the installed application to compute them.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            raskit-cli (CLI)             │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │ (ProjectService, ModelService, Session) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, ModelStore, RasConnector)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    raskit-adapters (Infrastructure)     │
//! │ (LocalFilesystem, presets, connectors)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (profiles, emitters, compute outcome)  │
//! │             No I/O of its own           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use raskit_core::prelude::*;
//!
//! // 1. Generate the project files
//! let projects = ProjectService::new(Box::new(filesystem));
//! let dir = projects.assemble(&model, "./output")?;
//!
//! // 2. Drive the application
//! let mut session = RasSession::new(Box::new(connector), RasSession::DEFAULT_PROG_ID);
//! if session.connect() {
//!     session.open_project(dir.join("tutorial.prj"))?;
//!     let outcome = session.run_simulation()?;
//!     println!("{}", outcome);
//! } // dropped: saved and quit
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ModelInfo, ModelService, ProjectService, RasSession, SessionError, SessionState,
        ports::{Filesystem, ModelStore, RasConnector, RasController},
    };
    pub use crate::domain::{
        BankStations, ComputeOutcome, CrossSectionProfile, FlowDefinition, ModelDefinition,
        ProjectManifest, ProjectStructure, RawValue, ReachLengths, RiverStations,
        RoughnessZones, UnitSystem,
    };
    pub use crate::error::{RasError, RasResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
