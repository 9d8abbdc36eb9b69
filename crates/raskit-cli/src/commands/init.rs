//! `raskit init`: create a default configuration file.

use std::path::Path;

use tracing::info;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default configuration to `--config FILE` or the platform
/// config location.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = global.config.unwrap_or_else(AppConfig::config_path);

    if config_path.exists() && !args.force && !confirm_overwrite(&config_path, &output)? {
        return Ok(());
    }

    let toml = AppConfig::default().to_toml()?;
    write_config(&config_path, &toml)?;

    info!(path = %config_path.display(), "configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display()
    ))?;
    Ok(())
}

fn write_config(path: &Path, contents: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, contents)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

/// Ask before replacing an existing file. Without a terminal (or without
/// the `interactive` feature) the file is left alone.
fn confirm_overwrite(path: &Path, output: &OutputManager) -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    {
        use crate::error::CliError;
        use std::io::IsTerminal;

        if std::io::stdin().is_terminal() && !output.is_quiet() {
            let overwrite = dialoguer::Confirm::new()
                .with_prompt(format!("{} exists. Overwrite?", path.display()))
                .default(false)
                .interact()
                .map_err(|e| CliError::IoError {
                    message: "failed to read confirmation input".into(),
                    source: std::io::Error::other(e),
                })?;
            if !overwrite {
                return Err(CliError::Cancelled);
            }
            return Ok(true);
        }
    }

    output.warning(&format!(
        "Config already exists at {} (use --force to overwrite)",
        path.display(),
    ))?;
    Ok(false)
}
