use tracing::debug;

use crate::domain::{
    emit::{
        PROGRAM_VERSION,
        format::{coordinate_lines, fixed, plain},
    },
    error::DomainError,
    value_objects::{
        BankStations, CrossSectionProfile, ReachLengths, RiverStations, RoughnessZones, non_empty,
    },
};

/// Inputs of [`emit_geometry`].
#[derive(Debug, Clone, Copy)]
pub struct GeometryInput<'a> {
    pub river: &'a str,
    pub reach: &'a str,
    pub upstream: &'a CrossSectionProfile,
    pub downstream: &'a CrossSectionProfile,
    pub roughness: RoughnessZones,
    pub bank_stations: BankStations,
    /// Distances from the upstream section to the downstream one.
    pub reach_lengths: ReachLengths,
    /// Added to every upstream elevation.
    pub elevation_shift: f64,
    pub stations: RiverStations,
}

impl GeometryInput<'_> {
    pub fn validate(&self) -> Result<(), DomainError> {
        non_empty("river name", self.river)?;
        non_empty("reach name", self.reach)?;
        self.upstream.validate("upstream")?;
        self.downstream.validate("downstream")?;
        self.bank_stations.validate_within(self.upstream, "upstream")?;
        self.bank_stations
            .validate_within(self.downstream, "downstream")?;
        self.roughness.validate()?;
        self.reach_lengths.validate()?;
        self.stations.validate()?;
        if !self.elevation_shift.is_finite() {
            return Err(DomainError::InvalidModel(format!(
                "elevation shift must be finite, got {}",
                self.elevation_shift
            )));
        }
        Ok(())
    }
}

/// Render the `.g01` geometry file: one reach with an upstream and a
/// downstream cross-section.
pub fn emit_geometry(input: &GeometryInput<'_>) -> Result<String, DomainError> {
    input.validate()?;

    let upstream = input.upstream.shifted(input.elevation_shift);

    let mut out = String::new();
    push_header(&mut out, input.river, input.reach);

    push_section(
        &mut out,
        &Section {
            river_station: input.stations.upstream,
            lengths: Some(input.reach_lengths),
            description: "Upstream Cross Section",
            profile: &upstream,
            roughness: input.roughness,
            banks: input.bank_stations,
        },
    );
    out.push('\n');
    push_section(
        &mut out,
        &Section {
            river_station: input.stations.downstream,
            lengths: None,
            description: "Downstream Cross Section",
            profile: input.downstream,
            roughness: input.roughness,
            banks: input.bank_stations,
        },
    );

    debug!(
        river = input.river,
        reach = input.reach,
        bytes = out.len(),
        "geometry rendered"
    );
    Ok(out)
}

struct Section<'a> {
    river_station: f64,
    /// `None` for the most downstream section.
    lengths: Option<ReachLengths>,
    description: &'a str,
    profile: &'a CrossSectionProfile,
    roughness: RoughnessZones,
    banks: BankStations,
}

fn push_header(out: &mut String, river: &str, reach: &str) {
    out.push_str("Geom Title=Base Geometry\n");
    out.push_str(&format!("Program Version={}\n", PROGRAM_VERSION));
    out.push_str("Viewing Rectangle= 0.0 , 1.0 , 1.0 , 0.0 \n\n");

    out.push_str(&format!("River Reach={},{}\n", river, reach));
    out.push_str("Reach XY= 3\n");
    out.push_str(
        "           0.0       1000.0           0.0        500.0           0.0          0.0\n",
    );
    out.push_str("Rch Text X Y=0.5,0.5\n");
    out.push_str("Reverse River Text= 0 \n\n");
}

fn push_section(out: &mut String, xs: &Section<'_>) {
    let lengths = match xs.lengths {
        Some(l) => format!(
            "{},{},{}",
            plain(l.left_overbank),
            plain(l.channel),
            plain(l.right_overbank)
        ),
        None => "     0,     0,     0".to_string(),
    };
    out.push_str(&format!(
        "Type RM Length L Ch R = 1 ,{}     ,{}\n",
        fixed(xs.river_station, 8, 1),
        lengths
    ));

    out.push_str("BEGIN DESCRIPTION:\n");
    out.push_str(xs.description);
    out.push('\n');
    out.push_str("END DESCRIPTION:\n");

    out.push_str(&format!("#Sta/Elev= {}\n", xs.profile.len()));
    out.push_str(&coordinate_lines(xs.profile.points()));

    // Zones start at the first station, the left bank and the right bank.
    let first = xs.profile.first_station().unwrap_or(xs.banks.left);
    out.push_str("#Mann= 3 , 0 , 0 \n");
    for (start, n) in [
        (first, xs.roughness.left_overbank),
        (xs.banks.left, xs.roughness.channel),
        (xs.banks.right, xs.roughness.right_overbank),
    ] {
        out.push_str(&fixed(start, 8, 0));
        out.push_str(&fixed(n, 8, 2));
        out.push_str("       0");
    }
    out.push('\n');

    out.push_str(&format!(
        "Bank Sta={:.0},{:.0}\n",
        xs.banks.left, xs.banks.right
    ));
    out.push_str("XS Rating Curve= 0 ,0\n");
    out.push_str("Exp/Cntr=0.3,0.1\n");
}

#[cfg(test)]
mod tests {
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

    fn input<'a>(up: &'a CrossSectionProfile, down: &'a CrossSectionProfile) -> GeometryInput<'a> {
        GeometryInput {
            river: "Canal",
            reach: "Reach_1",
            upstream: up,
            downstream: down,
            roughness: RoughnessZones::new(0.05, 0.03, 0.05),
            bank_stations: BankStations::new(20.0, 60.0),
            reach_lengths: ReachLengths::uniform(100.0),
            elevation_shift: 1.0,
            stations: RiverStations::default(),
        }
    }

    #[test]
    fn renders_two_sections_with_counts() {
        let p = v_profile();
        let text = emit_geometry(&input(&p, &p)).unwrap();
        assert_eq!(text.matches("#Sta/Elev= 5\n").count(), 2);
        assert_eq!(text.matches("#Mann= 3 , 0 , 0 \n").count(), 2);
        assert_eq!(text.matches("Bank Sta=20,60\n").count(), 2);
        assert!(text.contains("River Reach=Canal,Reach_1\n"));
    }

    #[test]
    fn upstream_header_carries_reach_lengths() {
        let p = v_profile();
        let text = emit_geometry(&input(&p, &p)).unwrap();
        assert!(text.contains("Type RM Length L Ch R = 1 ,  2000.0     ,100,100,100\n"));
        assert!(text.contains("Type RM Length L Ch R = 1 ,  1000.0     ,     0,     0,     0\n"));
    }

    #[test]
    fn upstream_elevations_are_shifted() {
        let p = v_profile();
        let text = emit_geometry(&input(&p, &p)).unwrap();
        let upstream_row = "       0   11.00      20    6.00      40    1.00      60    6.00      80   11.00\n";
        let downstream_row = "       0   10.00      20    5.00      40    0.00      60    5.00      80   10.00\n";
        let up_at = text.find(upstream_row).expect("upstream row");
        let down_at = text.find(downstream_row).expect("downstream row");
        assert!(up_at < down_at);
    }

    #[test]
    fn manning_row_uses_zone_start_stations() {
        let p = v_profile();
        let text = emit_geometry(&input(&p, &p)).unwrap();
        assert!(text.contains(
            "       0    0.05       0      20    0.03       0      60    0.05       0\n"
        ));
    }

    #[test]
    fn exactly_ceil_n_over_five_coordinate_lines() {
        for n in [2usize, 5, 6, 10, 11, 23] {
            let p = CrossSectionProfile::new((0..n).map(|i| (i as f64 * 10.0, 1.0)));
            let mut inp = input(&p, &p);
            inp.bank_stations = BankStations::new(2.0, 8.0);
            let text = emit_geometry(&inp).unwrap();

            let header = format!("#Sta/Elev= {}\n", n);
            let start = text.find(&header).unwrap() + header.len();
            let block: Vec<_> = text[start..]
                .lines()
                .take_while(|l| !l.starts_with("#Mann="))
                .collect();
            assert_eq!(block.len(), n.div_ceil(5), "n = {n}");
            assert!(block.iter().all(|l| l.len() <= 5 * 16));
            assert_eq!(block.iter().map(|l| l.len() / 16).sum::<usize>(), n);
        }
    }

    #[test]
    fn ends_with_single_newline() {
        let p = v_profile();
        let text = emit_geometry(&input(&p, &p)).unwrap();
        assert!(text.ends_with("Exp/Cntr=0.3,0.1\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn rejects_single_point_profile() {
        let p = CrossSectionProfile::new([(0.0, 1.0)]);
        let ok = v_profile();
        assert!(matches!(
            emit_geometry(&input(&p, &ok)),
            Err(DomainError::TooFewPoints { count: 1, .. })
        ));
    }

    #[test]
    fn rejects_banks_outside_extent() {
        let p = v_profile();
        for banks in [(0.0, 60.0), (20.0, 80.0), (-10.0, 40.0), (20.0, 95.0)] {
            let mut inp = input(&p, &p);
            inp.bank_stations = BankStations::new(banks.0, banks.1);
            assert!(
                matches!(
                    emit_geometry(&inp),
                    Err(DomainError::BankStationOutsideProfile { .. })
                ),
                "accepted {banks:?}"
            );
        }
    }

    #[test]
    fn rejects_swapped_banks() {
        let p = v_profile();
        let mut inp = input(&p, &p);
        inp.bank_stations = BankStations::new(60.0, 20.0);
        assert!(matches!(
            emit_geometry(&inp),
            Err(DomainError::BankStationsUnordered { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_roughness_and_lengths() {
        let p = v_profile();
        let mut inp = input(&p, &p);
        inp.roughness = RoughnessZones::new(0.05, 0.0, 0.05);
        assert!(matches!(
            emit_geometry(&inp),
            Err(DomainError::NonPositive { .. })
        ));

        let mut inp = input(&p, &p);
        inp.reach_lengths = ReachLengths::new(100.0, -1.0, 100.0);
        assert!(matches!(
            emit_geometry(&inp),
            Err(DomainError::NonPositive { .. })
        ));
    }

    #[test]
    fn rejects_inverted_river_stations() {
        let p = v_profile();
        let mut inp = input(&p, &p);
        inp.stations = RiverStations::new(1000.0, 2000.0);
        assert!(matches!(
            emit_geometry(&inp),
            Err(DomainError::RiverStationsUnordered { .. })
        ));
    }

    #[test]
    fn rejects_decreasing_stations() {
        let p = CrossSectionProfile::new([(0.0, 1.0), (30.0, 0.0), (20.0, 1.0), (80.0, 2.0)]);
        let mut inp = input(&p, &p);
        inp.bank_stations = BankStations::new(10.0, 50.0);
        assert!(matches!(
            emit_geometry(&inp),
            Err(DomainError::StationsOutOfOrder { index: 2, .. })
        ));
    }
}
