//! Text emitters for the application's plain-text project artifacts.
//!
//! Every emitter is a pure function: it validates its input, then formats it
//! against the fixed-column grammar the external application reads. No
//! emitter touches the filesystem; [`ProjectService`] persists the output.
//!
//! | Emitter                          | Artifact | Notes                         |
//! |----------------------------------|----------|-------------------------------|
//! | [`emit_manifest`]                | `.prj`   | infallible once name is valid |
//! | [`emit_geometry`]                | `.g01`   | two cross-section blocks      |
//! | [`emit_flow`]                    | `.f01`   | one steady-flow profile       |
//! | [`emit_plan`]                    | `.p01`   | interpolation spacing         |
//! | [`emit_single_section_geometry`] | `.g01`   | one section, no flow/plan     |
//!
//! [`ProjectService`]: crate::application::ProjectService

mod flow;
mod format;
mod geometry;
mod manifest;
mod plan;
mod single_section;

pub use flow::{FlowInput, emit_flow};
pub use geometry::{GeometryInput, emit_geometry};
pub use manifest::emit_manifest;
pub use plan::{PlanInput, emit_plan, interpolation_spacing};
pub use single_section::{SingleSectionInput, emit_single_section_geometry};

/// Version string written into geometry and plan headers.
pub const PROGRAM_VERSION: &str = "6.3";
