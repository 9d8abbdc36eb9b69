use crate::domain::{
    emit::PROGRAM_VERSION,
    error::DomainError,
    value_objects::{ReachLengths, RiverStations},
};

/// Inputs of [`emit_plan`].
#[derive(Debug, Clone, Copy)]
pub struct PlanInput {
    /// Sections the application interpolates between the two given ones.
    pub interpolation_points: i64,
    pub reach_lengths: ReachLengths,
    pub stations: RiverStations,
}

impl PlanInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.interpolation_points < 0 {
            return Err(DomainError::NegativeInterpolation(
                self.interpolation_points,
            ));
        }
        self.reach_lengths.validate()?;
        self.stations.validate()
    }
}

/// Maximum distance between interpolated sections along the channel.
pub fn interpolation_spacing(reach_lengths: &ReachLengths, interpolation_points: u32) -> f64 {
    reach_lengths.channel / (f64::from(interpolation_points) + 1.0)
}

/// Render the `.p01` plan file linking the geometry and flow files.
pub fn emit_plan(input: &PlanInput) -> Result<String, DomainError> {
    input.validate()?;

    let points = u32::try_from(input.interpolation_points)
        .map_err(|_| DomainError::InvalidModel(format!(
            "too many interpolation points: {}",
            input.interpolation_points
        )))?;
    let spacing = interpolation_spacing(&input.reach_lengths, points);

    let mut out = String::new();
    out.push_str("Plan Title=Plan 01\n");
    out.push_str("File Title=Plan 01\n");
    out.push_str(&format!("Program Version={}\n", PROGRAM_VERSION));
    out.push_str("Short Identifier=Plan01\n");
    out.push_str("Geom File=g01\n");
    out.push_str("Flow File=f01\n");
    out.push_str("Flow Regime=Mixed\n");
    out.push_str(&format!(
        "I.C. XS=Reach, {:.0}, {:.0},{:.2}\n",
        input.stations.upstream, input.stations.downstream, spacing
    ));
    Ok(out)
}
