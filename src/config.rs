//! Configuration management for the tweaks demo tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - Overrides file location

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the tweaks demo tool
#[derive(Debug, Parser)]
#[command(name = "tweaks-demo")]
#[command(about = "Registers the sample tweaks and drives them from an overrides file")]
#[command(version)]
pub struct Args {
    /// TOML file with tweak value overrides
    #[arg(long, help = "TOML file with tweak value overrides")]
    pub overrides: Option<PathBuf>,

    /// Keep running and re-apply the overrides file when it changes
    #[arg(long, help = "Watch the overrides file and re-apply on change")]
    pub watch: bool,

    /// Print the registered surface as JSON and exit
    #[arg(long, help = "Print the registered surface as JSON and exit")]
    pub export_json: bool,

    /// Log level for the demo tool
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Overrides file, explicit or discovered under the user config dir
    pub overrides_path: Option<PathBuf>,
    pub watch: bool,
    pub export_json: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let overrides_path = match args.overrides {
            Some(path) => Some(path),
            None => default_overrides_path(),
        };

        Ok(Config {
            overrides_path,
            watch: args.watch,
            export_json: args.export_json,
            log_level: args.log_level,
        })
    }
}

/// Default overrides location under the user config dir, when one exists on
/// disk.
fn default_overrides_path() -> Option<PathBuf> {
    let candidate = dirs::config_dir()?.join("tweaks-demo").join("overrides.toml");
    candidate.exists().then_some(candidate)
}
