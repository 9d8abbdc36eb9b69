use crate::domain::{
    emit::format::{plain, shortest},
    error::DomainError,
    value_objects::{
        BankStations, CrossSectionProfile, ReachLengths, RoughnessZones, non_empty,
    },
};

/// Inputs of [`emit_single_section_geometry`].
#[derive(Debug, Clone, Copy)]
pub struct SingleSectionInput<'a> {
    pub river: &'a str,
    pub reach: &'a str,
    pub river_station: f64,
    pub profile: &'a CrossSectionProfile,
    pub roughness: RoughnessZones,
    pub bank_stations: BankStations,
    pub reach_lengths: ReachLengths,
}

impl SingleSectionInput<'_> {
    pub fn validate(&self) -> Result<(), DomainError> {
        non_empty("river name", self.river)?;
        non_empty("reach name", self.reach)?;
        if !self.river_station.is_finite() {
            return Err(DomainError::InvalidModel(format!(
                "river station must be finite, got {}",
                self.river_station
            )));
        }
        self.profile.validate("section")?;
        self.bank_stations.validate_within(self.profile, "section")?;
        self.roughness.validate()?;
        self.reach_lengths.validate()
    }
}

/// Render a minimal geometry file holding a single cross-section.
///
/// Unlike [`emit_geometry`](super::emit_geometry) this uses the free-form
/// breakpoint layout (one `#Mann=` row per zone) and draws a square GIS cut
/// line over the profile's station extent. Useful for sketching a section
/// before building a full reach.
pub fn emit_single_section_geometry(input: &SingleSectionInput<'_>) -> Result<String, DomainError> {
    input.validate()?;

    let rs = shortest(input.river_station);
    let points = input.profile.points();
    // validate() guarantees at least two points
    let x0 = points[0].station;
    let x1 = points[points.len() - 1].station;
    let width = x1 - x0;

    let mut out = String::new();
    out.push_str("Geom Title=Simple Fluid Flow Simulation\n");
    out.push_str(&format!("River Reach={},{}\n", input.river, input.reach));
    out.push_str("Type RM Length/Ang=1 ,0 ,0\n");
    out.push_str(&format!("Rch=1 RS={}\n", rs));
    out.push_str(&format!(
        "XS GIS Cut Line={},{} ,{} ,{},0 ,{},0 ,{},{} ,{},{}\n",
        input.river,
        input.reach,
        rs,
        plain(x0),
        plain(x1),
        plain(x1),
        plain(width),
        plain(x0),
        plain(width)
    ));
    out.push_str(&format!("Begin XS: {}\n", rs));
    out.push_str("XS Rating Curve=0 \n");
    out.push_str("XS HTab Param=0 ,0 ,0 ,0 ,.2 ,0 \n");
    out.push_str(&format!(
        "XS Cut Line={} ,0 ,{} ,{}\n",
        plain(x0),
        plain(x1),
        plain(width)
    ));

    out.push_str(&format!("#Sta/Elev={} \n", points.len()));
    for p in points {
        out.push_str(&format!(" {} {}", plain(p.station), plain(p.elevation)));
    }
    out.push('\n');

    let zones = [
        (x0, input.roughness.left_overbank),
        (input.bank_stations.left, input.roughness.channel),
        (input.bank_stations.right, input.roughness.right_overbank),
    ];
    out.push_str(&format!("#Mann={} ,0 ,0 \n", zones.len()));
    for (start, n) in zones {
        out.push_str(&format!("{} {} 0 \n", plain(start), plain(n)));
    }

    out.push_str(&format!(
        "Bank Sta={},{}\n",
        plain(input.bank_stations.left),
        plain(input.bank_stations.right)
    ));
    out.push_str(&format!(
        "Reach Lengths={} ,{} ,{}\n",
        plain(input.reach_lengths.left_overbank),
        plain(input.reach_lengths.channel),
        plain(input.reach_lengths.right_overbank)
    ));
    out.push_str("End XS\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CrossSectionProfile {
        CrossSectionProfile::new([
            (0.0, 15.0),
            (10.0, 12.0),
            (20.0, 8.0),
            (30.0, 12.0),
            (40.0, 15.0),
        ])
    }

    fn input(p: &CrossSectionProfile) -> SingleSectionInput<'_> {
        SingleSectionInput {
            river: "SimpleRiver",
            reach: "MainReach",
            river_station: 100.0,
            profile: p,
            roughness: RoughnessZones::new(0.04, 0.03, 0.04),
            bank_stations: BankStations::new(10.0, 30.0),
            reach_lengths: ReachLengths::new(50.0, 100.0, 50.0),
        }
    }

    #[test]
    fn renders_single_section() {
        let p = profile();
        let text = emit_single_section_geometry(&input(&p)).unwrap();
        assert!(text.contains("Rch=1 RS=100.0\n"));
        assert!(text.contains("Begin XS: 100.0\n"));
        assert!(text.contains("XS GIS Cut Line=SimpleRiver,MainReach ,100.0 ,0,0 ,40,0 ,40,40 ,0,40\n"));
        assert!(text.contains("#Sta/Elev=5 \n 0 15 10 12 20 8 30 12 40 15\n"));
        assert!(text.contains("#Mann=3 ,0 ,0 \n0 0.04 0 \n10 0.03 0 \n30 0.04 0 \n"));
        assert!(text.contains("Bank Sta=10,30\n"));
        assert!(text.contains("Reach Lengths=50 ,100 ,50\n"));
        assert!(text.ends_with("End XS\n"));
    }

    #[test]
    fn validates_banks() {
        let p = profile();
        let mut inp = input(&p);
        inp.bank_stations = BankStations::new(0.0, 30.0);
        assert!(emit_single_section_geometry(&inp).is_err());
    }
}
