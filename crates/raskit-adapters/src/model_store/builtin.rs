//! Built-in model presets.
//!
//! Each preset is a model file embedded as TOML, so a preset can be dumped
//! with `raskit presets --format json` and used as a starting point for a
//! custom model.

use raskit_core::{
    application::ApplicationError,
    domain::{DomainValidator as validator, ModelDefinition},
    error::RasResult,
};

/// Two-section trapezoidal canal with a floodplain.
pub const TUTORIAL: &str = r#"
name = "tutorial"
description = "Trapezoidal canal with floodplain, 150 m3/s"
river = "Canal"
reach = "Reach_1"
cross_section = [
    [0, 10.0], [20, 10.0], [20, 5.0], [30, 5.0], [35, 2.0],
    [45, 2.0], [50, 5.0], [60, 5.0], [60, 10.0], [80, 10.0],
]
mannings_n = [0.05, 0.03, 0.05]
bank_stations = [30, 50]
reach_lengths = [1000, 1000, 1000]
elevation_shift = 1.0
interpolation_points = 9

[flow]
profile_name = "PF1"
rate = 150.0
downstream_slope = 0.001
"#;

/// Narrower section, shorter reach, milder bed slope.
pub const DEMO: &str = r#"
name = "demo"
description = "Demonstration river reach, 120 m3/s"
river = "DemoRiver"
reach = "MainReach"
cross_section = [
    [0, 12.0], [15, 12.0], [15, 8.0], [25, 8.0], [30, 5.0],
    [40, 5.0], [45, 8.0], [55, 8.0], [55, 12.0], [70, 12.0],
]
mannings_n = [0.04, 0.03, 0.04]
bank_stations = [15, 55]
reach_lengths = [800, 800, 800]
elevation_shift = 0.5
interpolation_points = 7

[flow]
profile_name = "Q120"
rate = 120.0
downstream_slope = 0.0015
"#;

/// Five-point V channel over a 100 m reach.
pub const SIMPLE: &str = r#"
name = "simple"
description = "Five-point V channel, 100 m reach"
river = "Canal"
reach = "Reach_1"
cross_section = [[0, 10.0], [20, 5.0], [40, 0.0], [60, 5.0], [80, 10.0]]
mannings_n = [0.05, 0.03, 0.05]
bank_stations = [20, 60]
reach_lengths = [100, 100, 100]
elevation_shift = 1.0
interpolation_points = 9

[flow]
profile_name = "PF1"
rate = 150.0
downstream_slope = 0.001
"#;

const PRESETS: [(&str, &str); 3] = [("tutorial", TUTORIAL), ("demo", DEMO), ("simple", SIMPLE)];

/// Names of the built-in presets.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

/// Parse and validate every built-in preset.
pub fn all_models() -> RasResult<Vec<ModelDefinition>> {
    PRESETS
        .iter()
        .map(|(key, source)| parse_preset(key, source))
        .collect()
}

fn parse_preset(key: &str, source: &str) -> RasResult<ModelDefinition> {
    let model: ModelDefinition =
        toml::from_str(source).map_err(|e| ApplicationError::ModelLoad {
            path: format!("<builtin:{}>", key).into(),
            reason: e.to_string(),
        })?;
    validator::validate_model(&model)?;
    Ok(model)
}
