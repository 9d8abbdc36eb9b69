//! Implementation of the `raskit run` command.
//!
//! Generates the project, then drives one controller session over it:
//! connect, open, optionally show the window, compute. The session is
//! scoped so that save and quit run on every exit path.

use std::{path::Path, time::Duration};

use serde_json::json;
use tracing::{info, instrument, warn};

use raskit_adapters::{LocalFilesystem, RehearsalConnector, UnavailableConnector};
use raskit_core::{
    application::{ProjectService, RasConnector, RasSession},
    domain::ComputeOutcome,
};

use crate::{
    cli::{OutputFormat, RunArgs},
    commands::resolve_model,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Manual post-processing in RAS Mapper, printed after a successful run.
const MAPPER_STEPS: &[&str] = &[
    "2. Click the 'RAS Mapper' button.",
    "3. In RAS Mapper, right-click on 'Terrains' -> 'Create a New RAS Terrain'.",
    "   - Use the geometry file as the source to create a terrain from your cross-sections.",
    "4. Expand 'Results' -> 'Plan01' in the left panel.",
    "5. Right-click on the result -> 'Create New Results Map Layer'.",
    "6. Create three maps: 'Depth', 'Velocity', and 'Depth * Velocity'.",
    "7. For the 'Depth * Velocity' map, right-click it -> 'Layer Properties' -> 'Symbology'.",
    "8. Set up user-defined ranges for hazard classification (e.g., <0.5, 0.5-1.5, >1.5).",
    "   - Assign colors (e.g., Blue, Yellow, Red) to represent low, medium, and high hazard.",
];

/// Execute the `raskit run` command.
#[instrument(skip_all, fields(project = %args.model.name, rehearse = args.rehearse))]
pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (model, base_dir) = resolve_model(&args.model, &config)?;

    output.header("Creating project files")?;
    let projects = ProjectService::new(Box::new(LocalFilesystem::new()));
    let dir = projects.assemble(&model, &base_dir)?;
    let project_file = dir.join(model.manifest().project_file());
    output.success(&format!("Project written to {}", dir.display()))?;

    let connector: Box<dyn RasConnector> = if args.rehearse {
        output.info("Rehearsal: no HEC-RAS process will be started")?;
        Box::new(RehearsalConnector::new())
    } else {
        Box::new(UnavailableConnector::new())
    };
    let prog_id = args.prog_id.unwrap_or(config.controller.prog_id);
    let show_secs = args
        .show_window
        .unwrap_or(config.controller.show_window_secs);

    output.header("Running HEC-RAS simulation")?;
    let outcome = simulate(connector, &prog_id, &project_file, show_secs, &output)?;
    info!(outcome = %outcome, "session finished");

    report(&outcome, &project_file, &output)
}

/// One scoped session. Dropping `session` saves and quits, including on
/// the early returns.
fn simulate(
    connector: Box<dyn RasConnector>,
    prog_id: &str,
    project_file: &Path,
    show_secs: u64,
    output: &OutputManager,
) -> CliResult<ComputeOutcome> {
    let mut session = RasSession::new(connector, prog_id);
    if !session.connect() {
        return Err(CliError::ApplicationUnavailable {
            prog_id: prog_id.to_string(),
        });
    }

    session.open_project(project_file)?;

    if show_secs > 0 {
        output.info(&format!("Showing the HEC-RAS window for {show_secs}s"))?;
        if let Err(e) = session.show_window(Duration::from_secs(show_secs)) {
            warn!(error = %e, "could not show window");
            output.warning(&format!("Could not show the window: {e}"))?;
        }
    }

    let spinner = output.spinner("Computing current plan...");
    let result = session.run_simulation();
    spinner.finish_and_clear();

    Ok(result?)
}

fn report(outcome: &ComputeOutcome, project_file: &Path, output: &OutputManager) -> CliResult<()> {
    let (non_failing, message) = outcome.summary();

    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "project": project_file,
            "success": outcome.is_success(),
            "verified": !matches!(outcome, ComputeOutcome::Unknown { .. }),
            "message": message,
        }))?;
    } else {
        match outcome {
            ComputeOutcome::Success => output.success(&message)?,
            ComputeOutcome::Unknown { .. } => output.warning(&message)?,
            ComputeOutcome::Failure { .. } => output.error(&message)?,
        }
    }

    if !non_failing {
        return Err(CliError::SimulationFailed { message });
    }

    if output.format() != OutputFormat::Json {
        print_mapper_steps(project_file, output)?;
    }
    Ok(())
}

fn print_mapper_steps(project_file: &Path, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.header("Manual steps for hazard mapping")?;
    output.print(&format!(
        "1. Open the HEC-RAS project: '{}'",
        project_file.display()
    ))?;
    for step in MAPPER_STEPS {
        output.print(step)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GlobalArgs;
    use raskit_core::domain::RawValue;
    use std::fs;
    use tempfile::TempDir;

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn project_on_disk(temp: &TempDir) -> std::path::PathBuf {
        let path = temp.path().join("p.prj");
        fs::write(&path, "Proj Title=p\n").unwrap();
        path
    }

    #[test]
    fn unavailable_connector_maps_to_external_error() {
        let temp = TempDir::new().unwrap();
        let err = simulate(
            Box::new(UnavailableConnector::new()),
            "RAS67.HECRASController",
            &project_on_disk(&temp),
            0,
            &quiet_output(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::ApplicationUnavailable { .. }));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn rehearsal_succeeds() {
        let temp = TempDir::new().unwrap();
        let outcome = simulate(
            Box::new(RehearsalConnector::new()),
            "X",
            &project_on_disk(&temp),
            0,
            &quiet_output(),
        )
        .unwrap();
        assert_eq!(outcome, ComputeOutcome::Success);
    }

    #[test]
    fn missing_project_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = simulate(
            Box::new(RehearsalConnector::new()),
            "X",
            &temp.path().join("absent.prj"),
            0,
            &quiet_output(),
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn failed_outcome_exits_with_external_code() {
        let outcome = ComputeOutcome::from_raw(RawValue::Tuple(vec![
            RawValue::Bool(false),
            RawValue::Int(2),
            RawValue::Tuple(vec![]),
            RawValue::Empty,
        ]));
        let err = report(&outcome, Path::new("p.prj"), &quiet_output()).unwrap_err();
        assert!(matches!(err, CliError::SimulationFailed { .. }));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn unknown_outcome_is_not_an_error() {
        let outcome = ComputeOutcome::from_raw(RawValue::Text("done".into()));
        assert!(report(&outcome, Path::new("p.prj"), &quiet_output()).is_ok());
    }
}
