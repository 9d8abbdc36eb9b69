//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "raskit",
    bin_name = "raskit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate HEC-RAS text projects and run them",
    long_about = "raskit writes the project, geometry, flow and plan files of a \
                  steady-flow HEC-RAS model from a few numeric parameters, then \
                  drives an installed copy of HEC-RAS to compute it.",
    after_help = "EXAMPLES:\n\
        \x20 raskit new tutorial\n\
        \x20 raskit new demo_model --preset demo -o ./projects\n\
        \x20 raskit run tutorial --rehearse\n\
        \x20 raskit presets --format json\n\
        \x20 raskit completions bash > /usr/share/bash-completion/completions/raskit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the project files for a model.
    #[command(
        visible_alias = "n",
        about = "Generate a HEC-RAS project",
        after_help = "EXAMPLES:\n\
            \x20 raskit new tutorial\n\
            \x20 raskit new canal --model ./models/canal.toml -o ./projects\n\
            \x20 raskit new demo_model --preset demo --dry-run"
    )]
    New(NewArgs),

    /// Generate a project, then compute it in HEC-RAS.
    #[command(
        about = "Generate a project and run the simulation",
        after_help = "EXAMPLES:\n\
            \x20 raskit run tutorial\n\
            \x20 raskit run tutorial --show-window 5\n\
            \x20 raskit run demo_model --preset demo --rehearse"
    )]
    Run(RunArgs),

    /// Write a geometry file holding one cross-section.
    #[command(
        about = "Write a single cross-section geometry file",
        after_help = "EXAMPLES:\n\
            \x20 raskit section ./out/simple_example.g01\n\
            \x20 raskit section ./out/canal.g01 --preset tutorial --rs 2000"
    )]
    Section(SectionArgs),

    /// List the available models.
    #[command(
        visible_alias = "ls",
        about = "List available model presets",
        after_help = "EXAMPLES:\n\
            \x20 raskit presets\n\
            \x20 raskit presets --format json\n\
            \x20 raskit presets --format toml > models/my_model.toml"
    )]
    Presets(PresetsArgs),

    /// Initialise a raskit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 raskit init\n\
            \x20 raskit init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 raskit completions bash > ~/.local/share/bash-completion/completions/raskit\n\
            \x20 raskit completions zsh  > ~/.zfunc/_raskit\n\
            \x20 raskit completions fish > ~/.config/fish/completions/raskit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the raskit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 raskit config get controller.prog_id\n\
            \x20 raskit config list\n\
            \x20 raskit config path"
    )]
    Config(ConfigCommands),
}

// ── model selection ───────────────────────────────────────────────────────────

/// Which model to build and where to put it. Shared by `new` and `run`.
#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Project name; also the directory created under the output directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    #[arg(
        short = 'p',
        long = "preset",
        value_name = "PRESET",
        conflicts_with = "model",
        help = "Model preset to use (default: defaults.preset from config)"
    )]
    pub preset: Option<String>,

    #[arg(
        short = 'm',
        long = "model",
        value_name = "FILE",
        help = "TOML model file to use instead of a preset"
    )]
    pub model: Option<PathBuf>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: defaults.output_dir from config)"
    )]
    pub output: Option<PathBuf>,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `raskit new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `raskit run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Drive an in-memory stand-in instead of the real application.
    #[arg(
        long = "rehearse",
        help = "Rehearse the session without HEC-RAS installed"
    )]
    pub rehearse: bool,

    #[arg(
        long = "show-window",
        value_name = "SECS",
        help = "Show the HEC-RAS window for SECS seconds before computing"
    )]
    pub show_window: Option<u64>,

    #[arg(
        long = "prog-id",
        value_name = "PROG_ID",
        help = "Automation class to connect to (default: controller.prog_id)"
    )]
    pub prog_id: Option<String>,
}

// ── section ───────────────────────────────────────────────────────────────────

/// Arguments for `raskit section`.
#[derive(Debug, Args)]
pub struct SectionArgs {
    /// Geometry file to write.
    #[arg(value_name = "FILE", help = "Geometry file to write (e.g. simple.g01)")]
    pub file: PathBuf,

    #[arg(long = "river", value_name = "NAME", help = "River name")]
    pub river: Option<String>,

    #[arg(long = "reach", value_name = "NAME", help = "Reach name")]
    pub reach: Option<String>,

    #[arg(long = "rs", value_name = "STATION", help = "River station of the section")]
    pub river_station: Option<f64>,

    /// Take profile, roughness, banks and lengths from a preset.
    #[arg(
        short = 'p',
        long = "preset",
        value_name = "PRESET",
        help = "Take the cross-section from a model preset"
    )]
    pub preset: Option<String>,
}

// ── presets ───────────────────────────────────────────────────────────────────

/// Arguments for `raskit presets`.
#[derive(Debug, Args)]
pub struct PresetsArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `presets` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array of summaries.
    Json,
    /// Full model definitions, usable as model files.
    Toml,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `raskit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `raskit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `raskit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `controller.prog_id`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
