//! Implementation of the `raskit section` command.

use tracing::instrument;

use raskit_adapters::LocalFilesystem;
use raskit_core::{
    application::ProjectService,
    domain::{
        BankStations, CrossSectionProfile, ReachLengths, RoughnessZones, SingleSectionInput,
    },
};

use crate::{
    cli::SectionArgs,
    commands::model_service,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Cross-section used when no preset is given.
struct SectionTemplate {
    river: String,
    reach: String,
    river_station: f64,
    profile: CrossSectionProfile,
    roughness: RoughnessZones,
    bank_stations: BankStations,
    reach_lengths: ReachLengths,
}

impl Default for SectionTemplate {
    fn default() -> Self {
        Self {
            river: "SimpleRiver".into(),
            reach: "MainReach".into(),
            river_station: 100.0,
            profile: CrossSectionProfile::new([
                (0.0, 15.0),
                (10.0, 12.0),
                (20.0, 8.0),
                (30.0, 12.0),
                (40.0, 15.0),
            ]),
            roughness: RoughnessZones::new(0.04, 0.03, 0.04),
            bank_stations: BankStations::new(10.0, 30.0),
            reach_lengths: ReachLengths::new(50.0, 100.0, 50.0),
        }
    }
}

impl SectionTemplate {
    fn from_preset(name: &str) -> CliResult<Self> {
        let model = model_service()?.get(name)?;
        Ok(Self {
            river: model.river,
            reach: model.reach,
            river_station: model.river_stations.upstream,
            profile: model.cross_section,
            roughness: model.mannings_n,
            bank_stations: model.bank_stations,
            reach_lengths: model.reach_lengths,
        })
    }

    fn apply(mut self, args: &SectionArgs) -> Self {
        if let Some(river) = &args.river {
            self.river = river.clone();
        }
        if let Some(reach) = &args.reach {
            self.reach = reach.clone();
        }
        if let Some(rs) = args.river_station {
            self.river_station = rs;
        }
        self
    }

    fn input(&self) -> SingleSectionInput<'_> {
        SingleSectionInput {
            river: &self.river,
            reach: &self.reach,
            river_station: self.river_station,
            profile: &self.profile,
            roughness: self.roughness,
            bank_stations: self.bank_stations,
            reach_lengths: self.reach_lengths,
        }
    }
}

/// Execute the `raskit section` command.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: SectionArgs, output: OutputManager) -> CliResult<()> {
    if args.file.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is a directory, expected a file path", args.file.display()),
            source: None,
        });
    }

    let template = match &args.preset {
        Some(name) => SectionTemplate::from_preset(name)?,
        None => SectionTemplate::default(),
    }
    .apply(&args);

    let service = ProjectService::new(Box::new(LocalFilesystem::new()));
    service.write_single_section(&template.input(), &args.file)?;

    output.success(&format!(
        "Geometry for {} / {} RS {} written to {}",
        template.river,
        template.reach,
        template.river_station,
        args.file.display()
    ))?;
    Ok(())
}
