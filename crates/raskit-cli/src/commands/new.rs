//! Implementation of the `raskit new` command.
//!
//! Responsibility: resolve the model, call the project service, and display
//! results.

use serde_json::json;
use tracing::{info, instrument};

use raskit_adapters::LocalFilesystem;
use raskit_core::{application::ProjectService, domain::ProjectStructure};

use crate::{
    cli::{NewArgs, OutputFormat},
    commands::resolve_model,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `raskit new` command.
///
/// 1. Resolve the model and output directory
/// 2. On `--dry-run`, render the files and list them
/// 3. Otherwise write the project and print next steps
#[instrument(skip_all, fields(project = %args.model.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (model, base_dir) = resolve_model(&args.model, &config)?;
    let service = ProjectService::new(Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let structure = service.plan(&model, &base_dir)?;
        return report_dry_run(&structure, &output);
    }

    output.header(&format!("Creating project '{}'...", model.name))?;
    let dir = service.assemble(&model, &base_dir)?;
    info!(path = %dir.display(), "project created");

    let manifest = model.manifest();
    let files = [
        manifest.project_file(),
        manifest.geometry_file(),
        manifest.flow_file(),
        manifest.plan_file(),
    ];

    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "project": model.name,
            "directory": dir,
            "files": files,
        }))?;
        return Ok(());
    }

    for file in &files {
        output.print(&format!("  {}", dir.join(file).display()))?;
    }
    output.success(&format!("Project '{}' created!", model.name))?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!(
        "  raskit run {} --output {}",
        model.name,
        base_dir.display()
    ))?;
    output.print(&format!(
        "  or open {} in HEC-RAS",
        dir.join(manifest.project_file()).display()
    ))?;

    Ok(())
}

fn report_dry_run(structure: &ProjectStructure, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let files: Vec<_> = structure
            .files()
            .map(|f| json!({ "path": f.path, "bytes": f.size() }))
            .collect();
        output.json(&json!({
            "dry_run": true,
            "directory": structure.root(),
            "files": files,
        }))?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create {} files in {}",
        structure.file_count(),
        structure.root().display(),
    ))?;
    for file in structure.files() {
        output.info(&format!(
            "  {:<16} {:>6} bytes",
            file.path.display().to_string(),
            file.size()
        ))?;
    }
    Ok(())
}
