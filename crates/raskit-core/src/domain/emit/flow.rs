use crate::domain::{
    emit::format::shortest,
    error::DomainError,
    value_objects::{RiverStations, non_empty, positive},
};

/// Inputs of [`emit_flow`].
#[derive(Debug, Clone, Copy)]
pub struct FlowInput<'a> {
    pub title: &'a str,
    pub river: &'a str,
    pub reach: &'a str,
    pub profile_name: &'a str,
    /// Discharge applied at the upstream section.
    pub flow_rate: f64,
    /// Friction slope of the normal-depth downstream boundary.
    pub downstream_slope: f64,
    pub stations: RiverStations,
}

impl FlowInput<'_> {
    pub const DEFAULT_TITLE: &'static str = "Q100 Flow";

    pub fn validate(&self) -> Result<(), DomainError> {
        non_empty("river name", self.river)?;
        non_empty("reach name", self.reach)?;
        non_empty("profile name", self.profile_name)?;
        positive("flow rate", self.flow_rate)?;
        positive("downstream slope", self.downstream_slope)?;
        self.stations.validate()
    }
}

/// Boundary type codes of the steady-flow grammar.
const UPSTREAM_NONE: u8 = 0;
const DOWNSTREAM_NORMAL_DEPTH: u8 = 3;

/// Render the `.f01` steady-flow file: one profile, one flow value at the
/// upstream section and a normal-depth downstream boundary.
pub fn emit_flow(input: &FlowInput<'_>) -> Result<String, DomainError> {
    input.validate()?;

    let mut out = String::new();
    out.push_str(&format!("Flow Title={}\n", input.title));
    out.push_str("Number of Profiles= 1\n");
    out.push_str(&format!("Profile Names={}\n", input.profile_name));

    out.push_str(&format!(
        "River Rch & RM={},{} ,{:.1}     \n",
        input.river, input.reach, input.stations.upstream
    ));
    out.push_str(&format!("     {}\n", shortest(input.flow_rate)));

    out.push_str(&format!(
        "Boundary for River Rch & Prof#={},{} , 1 \n",
        input.river, input.reach
    ));
    out.push_str(&format!("Up Type= {} \n", UPSTREAM_NONE));
    out.push_str(&format!("Dn Type= {} \n", DOWNSTREAM_NORMAL_DEPTH));
    out.push_str(&format!("Dn Slope={}\n", shortest(input.downstream_slope)));

    Ok(out)
}
