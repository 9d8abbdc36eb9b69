//! Project Service - assembles a project directory from a model.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate the model
//! 2. Render manifest, geometry, flow and plan text
//! 3. Write the four files into `<base>/<name>/`
//!
//! Rendering finishes before the filesystem is touched, so a validation
//! error never leaves a half-written project behind.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        DomainValidator as validator, ModelDefinition, ProjectStructure, SingleSectionInput,
        emit_flow, emit_geometry, emit_manifest, emit_plan, emit_single_section_geometry,
    },
    error::RasResult,
};

/// Project generation service.
pub struct ProjectService {
    filesystem: Box<dyn Filesystem>,
}

impl ProjectService {
    /// Create a new project service writing through `filesystem`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use raskit_core::application::ProjectService;
    ///
    /// let service = ProjectService::new(Box::new(filesystem));
    /// let dir = service.assemble(&model, "./out")?;
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Render every file of `model` without writing anything.
    #[instrument(skip_all, fields(project = %model.name))]
    pub fn plan(
        &self,
        model: &ModelDefinition,
        base_dir: impl AsRef<Path>,
    ) -> RasResult<ProjectStructure> {
        validator::validate_model(model)?;

        let manifest = model.manifest();
        let structure = ProjectStructure::new(manifest.project_dir(base_dir.as_ref()))
            .with_file(manifest.project_file(), emit_manifest(&manifest))
            .with_file(
                manifest.geometry_file(),
                emit_geometry(&model.geometry_input())?,
            )
            .with_file(manifest.flow_file(), emit_flow(&model.flow_input())?)
            .with_file(manifest.plan_file(), emit_plan(&model.plan_input())?);

        validator::validate_project_structure(&structure)?;
        debug!(files = structure.file_count(), "project rendered");
        Ok(structure)
    }

    /// Generate the project directory for `model` under `base_dir`.
    ///
    /// Returns the project directory. Running it twice with the same
    /// arguments overwrites the files with identical content.
    #[instrument(
        skip_all,
        fields(
            project = %model.name,
            base_dir = %base_dir.as_ref().display()
        )
    )]
    pub fn assemble(
        &self,
        model: &ModelDefinition,
        base_dir: impl AsRef<Path>,
    ) -> RasResult<PathBuf> {
        info!("Assembling project {}", model.name);

        let structure = self.plan(model, base_dir)?;
        self.write_structure(&structure)?;

        info!(path = %structure.root().display(), "Project files written");
        Ok(structure.root().to_path_buf())
    }

    /// Write a standalone single-section geometry file to `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn write_single_section(
        &self,
        input: &SingleSectionInput<'_>,
        path: impl AsRef<Path>,
    ) -> RasResult<()> {
        let path = path.as_ref();
        validator::validate_single_section(input)?;
        let text = emit_single_section_geometry(input)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &text)?;

        info!("Single-section geometry written");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_structure(&self, structure: &ProjectStructure) -> RasResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for file in structure.files() {
            let path = structure.root().join(&file.path);
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.size(), "wrote");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::domain::{
        BankStations, CrossSectionProfile, DomainError, FlowDefinition, ReachLengths,
        RiverStations, RoughnessZones, UnitSystem,
    };
    use crate::error::RasError;

    fn model() -> ModelDefinition {
        ModelDefinition {
            name: "simple".into(),
            description: None,
            units: UnitSystem::Metric,
            river: "Canal".into(),
            reach: "Reach_1".into(),
            cross_section: CrossSectionProfile::new([
                (0.0, 10.0),
                (20.0, 5.0),
                (40.0, 0.0),
                (60.0, 5.0),
                (80.0, 10.0),
            ]),
            downstream_cross_section: None,
            mannings_n: RoughnessZones::new(0.05, 0.03, 0.05),
            bank_stations: BankStations::new(20.0, 60.0),
            reach_lengths: ReachLengths::uniform(100.0),
            elevation_shift: 1.0,
            river_stations: RiverStations::default(),
            interpolation_points: 9,
            flow: FlowDefinition {
                profile_name: "PF1".into(),
                rate: 150.0,
                downstream_slope: 0.001,
                title: None,
            },
        }
    }

    #[test]
    fn plan_renders_four_files_under_named_dir() {
        let service = ProjectService::new(Box::new(MockFilesystem::new()));
        let structure = service.plan(&model(), "/out").unwrap();

        assert_eq!(structure.root(), Path::new("/out/simple"));
        assert_eq!(structure.file_count(), 4);
        assert!(structure.content_of("simple.prj").is_some());
        assert!(structure.content_of("simple.g01").is_some());
        assert!(structure.content_of("simple.f01").unwrap().contains("     150.0\n"));
        assert!(structure.content_of("simple.p01").unwrap().contains(",10.00\n"));
    }

    #[test]
    fn assemble_writes_every_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/out/simple"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| p.starts_with("/out/simple"))
            .times(4)
            .returning(|_, _| Ok(()));

        let service = ProjectService::new(Box::new(fs));
        let dir = service.assemble(&model(), "/out").unwrap();
        assert_eq!(dir, PathBuf::from("/out/simple"));
    }

    #[test]
    fn validation_error_touches_nothing() {
        // No expectations: any filesystem call would panic.
        let service = ProjectService::new(Box::new(MockFilesystem::new()));

        let mut bad = model();
        bad.bank_stations = BankStations::new(0.0, 60.0);
        let err = service.assemble(&bad, "/out").unwrap_err();
        assert!(matches!(
            err,
            RasError::Domain(DomainError::BankStationOutsideProfile { .. })
        ));
    }

    #[test]
    fn filesystem_error_propagates_with_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let service = ProjectService::new(Box::new(fs));
        let err = service.assemble(&model(), "/ro").unwrap_err();
        assert!(matches!(
            err,
            RasError::Application(ApplicationError::FilesystemError { ref path, .. })
                if path == Path::new("/ro/simple")
        ));
    }

    #[test]
    fn single_section_creates_parent_dir() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/out/geo"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, text| p == Path::new("/out/geo/simple.g01") && text.ends_with("End XS\n"))
            .times(1)
            .returning(|_, _| Ok(()));

        let m = model();
        let input = SingleSectionInput {
            river: &m.river,
            reach: &m.reach,
            river_station: 100.0,
            profile: &m.cross_section,
            roughness: m.mannings_n,
            bank_stations: m.bank_stations,
            reach_lengths: m.reach_lengths,
        };
        let service = ProjectService::new(Box::new(fs));
        service
            .write_single_section(&input, "/out/geo/simple.g01")
            .unwrap();
    }
}
