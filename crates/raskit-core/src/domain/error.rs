// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is raised before any text is produced or any file is
/// touched. All errors are:
/// - Cloneable (so callers can report and keep them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Geometry
    // ========================================================================
    #[error("cross section '{section}' needs at least 2 points, got {count}")]
    TooFewPoints { section: String, count: usize },

    #[error("cross section '{section}' has a non-finite value at point {index}")]
    NonFiniteCoordinate { section: String, index: usize },

    #[error(
        "cross section '{section}' stations must not decrease: point {index} has {station} after {previous}"
    )]
    StationsOutOfOrder {
        section: String,
        index: usize,
        station: f64,
        previous: f64,
    },

    #[error("bank stations must satisfy left < right, got {left} and {right}")]
    BankStationsUnordered { left: f64, right: f64 },

    #[error(
        "bank station {station} lies outside cross section '{section}' extent [{min}, {max}]"
    )]
    BankStationOutsideProfile {
        section: String,
        station: f64,
        min: f64,
        max: f64,
    },

    #[error("river station {upstream} must be greater than downstream station {downstream}")]
    RiverStationsUnordered { upstream: f64, downstream: f64 },

    // ========================================================================
    // Magnitudes
    // ========================================================================
    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("interpolation point count must not be negative, got {0}")]
    NegativeInterpolation(i64),

    // ========================================================================
    // Names
    // ========================================================================
    #[error("{field} cannot be empty")]
    EmptyName { field: &'static str },

    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    // ========================================================================
    // Lookup
    // ========================================================================
    #[error("no model named '{0}'")]
    ModelNotFound(String),

    #[error("invalid model definition: {0}")]
    InvalidModel(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TooFewPoints { section, .. } => vec![
                format!("Add more station/elevation pairs to '{}'", section),
                "A cross section needs at least a left and a right point".into(),
            ],
            Self::BankStationOutsideProfile { min, max, .. } => vec![
                format!(
                    "Choose bank stations strictly between {} and {}",
                    min, max
                ),
                "Bank stations split the section into overbank and channel zones".into(),
            ],
            Self::BankStationsUnordered { .. } => {
                vec!["List the left bank station first, then the right one".into()]
            }
            Self::StationsOutOfOrder { .. } => vec![
                "Sort the profile by station, left to right".into(),
                "Repeat a station to model a vertical wall".into(),
            ],
            Self::NonPositive { field, .. } => {
                vec![format!("Use a value greater than zero for {}", field)]
            }
            Self::InvalidProjectName { .. } => vec![
                "Use letters, digits, hyphens and underscores".into(),
                "Examples: tutorial, canal_2024, demo-model".into(),
            ],
            Self::ModelNotFound(_) => vec![
                "Try: raskit presets to see available models".into(),
                "Or pass a model file with --model".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelNotFound(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
