pub mod manifest;
pub mod model;
pub mod project_structure;

pub use crate::domain::DomainError;
pub use manifest::ProjectManifest;
pub use model::{FlowDefinition, ModelDefinition};
pub use project_structure::{FileToWrite, ProjectStructure};
