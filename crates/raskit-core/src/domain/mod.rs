// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for raskit.
//!
//! Pure logic only: cross-section value objects, validation, the text
//! emitters for the project/geometry/flow/plan files, and interpretation of
//! the application's compute result. All I/O and automation concerns are
//! handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: emitters return `String`, never touch the filesystem
//! - **Validate first**: every emitter rejects bad input before writing text
//! - **Immutable entities**: all domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod compute;
pub mod emit;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

pub use compute::{ComputeOutcome, RawValue};
pub use emit::{
    FlowInput, GeometryInput, PROGRAM_VERSION, PlanInput, SingleSectionInput, emit_flow,
    emit_geometry, emit_manifest, emit_plan, emit_single_section_geometry,
    interpolation_spacing,
};
pub use entities::{
    FileToWrite, FlowDefinition, ModelDefinition, ProjectManifest, ProjectStructure,
    manifest::validate_project_name,
};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{
    BankStations, CrossSectionProfile, ReachLengths, RiverStations, RoughnessZones,
    StationElevation, UnitSystem,
};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn v_profile() -> CrossSectionProfile {
        CrossSectionProfile::new([
            (0.0, 10.0),
            (20.0, 5.0),
            (40.0, 0.0),
            (60.0, 5.0),
            (80.0, 10.0),
        ])
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn unit_system_parses_correctly() {
        assert_eq!(UnitSystem::from_str("metric").unwrap(), UnitSystem::Metric);
        assert_eq!(UnitSystem::from_str("SI").unwrap(), UnitSystem::Metric);
        assert_eq!(
            UnitSystem::from_str("English").unwrap(),
            UnitSystem::UsCustomary
        );
        assert!(UnitSystem::from_str("cubits").is_err());
    }

    #[test]
    fn profile_allows_vertical_walls() {
        let p = CrossSectionProfile::new([(0.0, 10.0), (20.0, 10.0), (20.0, 5.0), (40.0, 5.0)]);
        assert!(p.validate("xs").is_ok());
    }

    #[test]
    fn profile_rejects_non_finite_values() {
        let p = CrossSectionProfile::new([(0.0, 10.0), (f64::NAN, 5.0)]);
        assert!(matches!(
            p.validate("xs"),
            Err(DomainError::NonFiniteCoordinate { index: 1, .. })
        ));
    }

    #[test]
    fn shifted_profile_keeps_stations() {
        let p = v_profile().shifted(1.5);
        assert_eq!(p.points()[2], StationElevation::new(40.0, 1.5));
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn bank_stations_must_be_strictly_inside() {
        let p = v_profile();
        assert!(BankStations::new(20.0, 60.0).validate_within(&p, "xs").is_ok());
        assert!(BankStations::new(0.0, 60.0).validate_within(&p, "xs").is_err());
        assert!(BankStations::new(20.0, 80.0).validate_within(&p, "xs").is_err());
    }

    #[test]
    fn roughness_and_lengths_must_be_positive() {
        assert!(RoughnessZones::new(0.05, 0.03, 0.05).validate().is_ok());
        assert!(RoughnessZones::new(0.05, f64::INFINITY, 0.05).validate().is_err());
        assert!(ReachLengths::uniform(0.0).validate().is_err());
    }

    #[test]
    fn river_stations_default() {
        let rs = RiverStations::default();
        assert_eq!(rs.upstream, 2000.0);
        assert_eq!(rs.downstream, 1000.0);
        assert!(rs.validate().is_ok());
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_rejects_negative_interpolation() {
        let plan = PlanInput {
            interpolation_points: -1,
            reach_lengths: ReachLengths::uniform(100.0),
            stations: RiverStations::default(),
        };
        assert_eq!(
            DomainValidator::validate_plan(&plan),
            Err(DomainError::NegativeInterpolation(-1))
        );
    }

    #[test]
    fn validator_rejects_bad_manifest_name() {
        let manifest = ProjectManifest::new("a/b", UnitSystem::Metric);
        assert!(DomainValidator::validate_manifest(&manifest).is_err());
    }

    #[test]
    fn validator_rejects_empty_profile_name() {
        let flow = FlowInput {
            title: FlowInput::DEFAULT_TITLE,
            river: "Canal",
            reach: "Reach_1",
            profile_name: " ",
            flow_rate: 150.0,
            downstream_slope: 0.001,
            stations: RiverStations::default(),
        };
        assert_eq!(
            DomainValidator::validate_flow(&flow),
            Err(DomainError::EmptyName {
                field: "profile name"
            })
        );
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn errors_carry_suggestions_and_category() {
        let err = DomainError::ModelNotFound("nope".into());
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());

        let err = DomainError::NonPositive {
            field: "flow rate",
            value: 0.0,
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions()[0].contains("flow rate"));
    }
}
