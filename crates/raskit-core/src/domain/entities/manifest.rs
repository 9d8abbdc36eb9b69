use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, value_objects::UnitSystem};

/// Top-level project manifest: the `.prj` file and its naming convention.
///
/// Every artifact of a project shares the project name as its stem; the
/// extension selects the artifact kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    name: String,
    units: UnitSystem,
}

impl ProjectManifest {
    pub const PROJECT_EXT: &'static str = "prj";
    pub const GEOMETRY_SUFFIX: &'static str = "g01";
    pub const FLOW_SUFFIX: &'static str = "f01";
    pub const PLAN_SUFFIX: &'static str = "p01";

    pub fn new(name: impl Into<String>, units: UnitSystem) -> Self {
        Self {
            name: name.into(),
            units,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn project_file(&self) -> PathBuf {
        self.file_with(Self::PROJECT_EXT)
    }

    pub fn geometry_file(&self) -> PathBuf {
        self.file_with(Self::GEOMETRY_SUFFIX)
    }

    pub fn flow_file(&self) -> PathBuf {
        self.file_with(Self::FLOW_SUFFIX)
    }

    pub fn plan_file(&self) -> PathBuf {
        self.file_with(Self::PLAN_SUFFIX)
    }

    /// Directory a project named `self.name` occupies under `base`.
    pub fn project_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.name)
    }

    fn file_with(&self, ext: &str) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.name, ext))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_project_name(&self.name)
    }
}

/// Project names become a directory and a file stem, so they must be a
/// single plain path component.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if name.chars().any(char::is_control) {
        return Err(invalid("name cannot contain control characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_names_share_the_project_stem() {
        let m = ProjectManifest::new("tutorial", UnitSystem::Metric);
        assert_eq!(m.project_file(), PathBuf::from("tutorial.prj"));
        assert_eq!(m.geometry_file(), PathBuf::from("tutorial.g01"));
        assert_eq!(m.flow_file(), PathBuf::from("tutorial.f01"));
        assert_eq!(m.plan_file(), PathBuf::from("tutorial.p01"));
    }

    #[test]
    fn project_dir_nests_under_base() {
        let m = ProjectManifest::new("demo", UnitSystem::Metric);
        assert_eq!(
            m.project_dir(Path::new("out")),
            PathBuf::from("out").join("demo")
        );
    }

    #[test]
    fn rejects_bad_names() {
        for name in ["", "   ", ".hidden", "a/b", "a\\b"] {
            assert!(
                matches!(
                    validate_project_name(name),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted: {name:?}"
            );
        }
    }

    #[test]
    fn accepts_plain_names() {
        for name in ["tutorial", "demo_model", "canal-2024", "Reach1"] {
            assert!(validate_project_name(name).is_ok(), "rejected: {name}");
        }
    }
}
