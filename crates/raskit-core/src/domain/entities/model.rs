//! A complete two-section steady-flow model, as read from a model file.

use serde::{Deserialize, Serialize};

use crate::domain::{
    emit::{FlowInput, GeometryInput, PlanInput},
    entities::manifest::ProjectManifest,
    error::DomainError,
    value_objects::{
        BankStations, CrossSectionProfile, ReachLengths, RiverStations, RoughnessZones,
        UnitSystem,
    },
};

/// Everything needed to generate one project.
///
/// Deserialises from TOML:
///
/// ```toml
/// name = "tutorial"
/// river = "Canal"
/// reach = "Reach_1"
/// cross_section = [[0, 10.0], [20, 10.0], [20, 5.0], [60, 5.0], [60, 10.0], [80, 10.0]]
/// mannings_n = [0.05, 0.03, 0.05]
/// bank_stations = [30, 50]
/// reach_lengths = [1000, 1000, 1000]
/// elevation_shift = 1.0
/// interpolation_points = 9
///
/// [flow]
/// profile_name = "PF1"
/// rate = 150.0
/// downstream_slope = 0.001
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub units: UnitSystem,

    pub river: String,
    pub reach: String,

    /// Shape of the upstream section (before the elevation shift).
    pub cross_section: CrossSectionProfile,
    /// Shape of the downstream section; defaults to `cross_section`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_cross_section: Option<CrossSectionProfile>,

    pub mannings_n: RoughnessZones,
    pub bank_stations: BankStations,
    pub reach_lengths: ReachLengths,
    /// Vertical shift applied to the upstream section to create bed slope.
    #[serde(default = "default_elevation_shift")]
    pub elevation_shift: f64,
    #[serde(default)]
    pub river_stations: RiverStations,
    /// Number of sections the application interpolates between the two.
    #[serde(default = "default_interpolation_points")]
    pub interpolation_points: i64,

    pub flow: FlowDefinition,
}

/// `[flow]` table of a model file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub profile_name: String,
    /// Discharge at the upstream section.
    pub rate: f64,
    /// Friction slope for the normal-depth downstream boundary.
    pub downstream_slope: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

fn default_elevation_shift() -> f64 {
    1.0
}

fn default_interpolation_points() -> i64 {
    9
}

impl ModelDefinition {
    pub fn manifest(&self) -> ProjectManifest {
        ProjectManifest::new(&self.name, self.units)
    }

    pub fn downstream_profile(&self) -> &CrossSectionProfile {
        self.downstream_cross_section
            .as_ref()
            .unwrap_or(&self.cross_section)
    }

    pub fn geometry_input(&self) -> GeometryInput<'_> {
        GeometryInput {
            river: &self.river,
            reach: &self.reach,
            upstream: &self.cross_section,
            downstream: self.downstream_profile(),
            roughness: self.mannings_n,
            bank_stations: self.bank_stations,
            reach_lengths: self.reach_lengths,
            elevation_shift: self.elevation_shift,
            stations: self.river_stations,
        }
    }

    pub fn flow_input(&self) -> FlowInput<'_> {
        FlowInput {
            title: self.flow.title.as_deref().unwrap_or(FlowInput::DEFAULT_TITLE),
            river: &self.river,
            reach: &self.reach,
            profile_name: &self.flow.profile_name,
            flow_rate: self.flow.rate,
            downstream_slope: self.flow.downstream_slope,
            stations: self.river_stations,
        }
    }

    pub fn plan_input(&self) -> PlanInput {
        PlanInput {
            interpolation_points: self.interpolation_points,
            reach_lengths: self.reach_lengths,
            stations: self.river_stations,
        }
    }

    /// Rename the model, keeping everything else.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Check every invariant the emitters rely on, without producing text.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.manifest().validate()?;
        self.geometry_input().validate()?;
        self.flow_input().validate()?;
        self.plan_input().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TUTORIAL: &str = r#"
name = "tutorial"
river = "Canal"
reach = "Reach_1"
cross_section = [[0, 10.0], [20, 10.0], [20, 5.0], [30, 5.0], [35, 2.0],
                 [45, 2.0], [50, 5.0], [60, 5.0], [60, 10.0], [80, 10.0]]
mannings_n = [0.05, 0.03, 0.05]
bank_stations = [30, 50]
reach_lengths = [1000, 1000, 1000]

[flow]
profile_name = "PF1"
rate = 150.0
downstream_slope = 0.001
"#;

    #[test]
    fn parses_toml_with_defaults() {
        let model: ModelDefinition = toml::from_str(TUTORIAL).unwrap();
        assert_eq!(model.cross_section.len(), 10);
        assert_eq!(model.bank_stations, BankStations::new(30.0, 50.0));
        assert_eq!(model.reach_lengths, ReachLengths::uniform(1000.0));
        assert_eq!(model.elevation_shift, 1.0);
        assert_eq!(model.interpolation_points, 9);
        assert_eq!(model.units, UnitSystem::Metric);
        assert_eq!(model.river_stations, RiverStations::default());
        assert!(model.validate().is_ok());
    }

    #[test]
    fn downstream_profile_falls_back_to_upstream() {
        let model: ModelDefinition = toml::from_str(TUTORIAL).unwrap();
        assert_eq!(model.downstream_profile(), &model.cross_section);
    }

    #[test]
    fn flow_title_defaults() {
        let model: ModelDefinition = toml::from_str(TUTORIAL).unwrap();
        assert_eq!(model.flow_input().title, "Q100 Flow");
    }

    #[test]
    fn validate_reports_bad_banks() {
        let mut model: ModelDefinition = toml::from_str(TUTORIAL).unwrap();
        model.bank_stations = BankStations::new(-5.0, 50.0);
        assert!(matches!(
            model.validate(),
            Err(DomainError::BankStationOutsideProfile { .. })
        ));
    }

    #[test]
    fn validate_reports_bad_name() {
        let model: ModelDefinition = toml::from_str(TUTORIAL).unwrap();
        let model = model.with_name("../escape");
        assert!(matches!(
            model.validate(),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }
}
