//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Groundwork - build-phase provisioning runner
///
/// Prepares a deployment environment by upgrading the package installer,
/// installing manifest dependencies and a headless browser engine, in a
/// fixed order with fail-fast exit-code propagation.
#[derive(Parser, Debug)]
#[command(name = "groundwork")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GROUNDWORK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local .groundwork.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute the provisioning sequence
    Run(RunArgs),

    /// Show the resolved step sequence without executing it
    Plan(PlanArgs),

    /// Initialize a project-local .groundwork.toml config
    Init(InitArgs),

    /// Check external tools and files without changing anything
    Doctor,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Dependency manifest path (overrides config)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Skip the headless browser install step
    #[arg(long)]
    pub skip_browser: bool,

    /// Also install OS-level browser libraries (needs elevated privileges)
    #[arg(long, conflicts_with = "skip_browser")]
    pub with_deps: bool,

    /// Create this toolchain cache directory and export it to every step
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Print the plan and exit without running anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the plan command
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite existing .groundwork.toml
    #[arg(short, long)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Output format for the plan command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one step per line)
    Plain,
}
