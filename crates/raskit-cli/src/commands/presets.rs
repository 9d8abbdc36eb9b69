//! Implementation of the `raskit presets` command.

use raskit_core::error::RasError;

use crate::{
    cli::{ListFormat, PresetsArgs},
    commands::model_service,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: PresetsArgs, output: OutputManager) -> CliResult<()> {
    let service = model_service()?;
    let models = service.list()?;

    match args.format {
        ListFormat::Table => {
            output.header("Available models:")?;
            output.print(&format!(
                "  {:<12} {:<12} {:<10} {:>6} {:>10}  {}",
                "NAME", "RIVER", "REACH", "POINTS", "FLOW", "PROFILE"
            ))?;
            for m in &models {
                output.print(&format!(
                    "  {:<12} {:<12} {:<10} {:>6} {:>10}  {}",
                    m.name, m.river, m.reach, m.points, m.flow_rate, m.profile
                ))?;
                if !m.description.is_empty() {
                    output.print(&format!("    {}", m.description))?;
                }
            }
        }

        ListFormat::List => {
            for m in &models {
                output.print(&m.name)?;
            }
        }

        ListFormat::Json => output.json(&models)?,

        ListFormat::Toml => {
            for (i, model) in service.definitions()?.iter().enumerate() {
                let text = toml::to_string_pretty(model).map_err(|e| RasError::Internal {
                    message: format!("cannot render model '{}' as TOML: {e}", model.name),
                })?;
                if i > 0 {
                    output.print("")?;
                }
                output.print(&format!("# ── {} ──", model.name))?;
                output.print(text.trim_end())?;
            }
        }
    }

    Ok(())
}
