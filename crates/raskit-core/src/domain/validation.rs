use crate::domain::{
    emit::{FlowInput, GeometryInput, PlanInput, SingleSectionInput},
    entities::{ModelDefinition, ProjectManifest, ProjectStructure},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Services call through here rather than reaching into each input type, so
/// there is one place to see what gets checked before a project is written.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_model(model: &ModelDefinition) -> Result<(), DomainError> {
        model.validate()
    }

    pub fn validate_manifest(manifest: &ProjectManifest) -> Result<(), DomainError> {
        manifest.validate()
    }

    pub fn validate_geometry(input: &GeometryInput<'_>) -> Result<(), DomainError> {
        input.validate()
    }

    pub fn validate_flow(input: &FlowInput<'_>) -> Result<(), DomainError> {
        input.validate()
    }

    pub fn validate_plan(input: &PlanInput) -> Result<(), DomainError> {
        input.validate()
    }

    pub fn validate_single_section(input: &SingleSectionInput<'_>) -> Result<(), DomainError> {
        input.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
