use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::Language;
use crate::output::OutputFormat;
use crate::review::CheckId;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Serialization of `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cpd-guard")]
#[command(author, version, about = "Warn when a branch adds copy/paste duplication")]
#[command(long_about = "Runs PMD's Copy/Paste Detector on the working tree and on a fresh \
    shallow clone of the target branch, and warns when duplication went up.\n\n\
    Exit codes:\n  \
    0 - Checks ran (warnings do not fail unless --fail-on-warning)\n  \
    1 - Warnings emitted with --fail-on-warning\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the review checks against the target branch
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Duplication comparison options that override the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct CpdArgs {
    /// CPD language (cpp, cs, java, php, ruby, ecmascript, ...)
    #[arg(long)]
    pub language: Option<Language>,

    /// Minimum duplicate size in tokens
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub minimum_tokens: Option<u32>,

    /// Source folder to analyze
    #[arg(long)]
    pub folder: Option<String>,

    /// Repository slug to clone the target branch from (owner/name)
    #[arg(long)]
    pub repository: Option<String>,

    /// Target branch to compare against
    #[arg(long)]
    pub branch: Option<String>,

    /// Directory the target branch is cloned into
    #[arg(long)]
    pub staging_dir: Option<String>,

    /// Clone into a fresh directory per run
    #[arg(long)]
    pub unique_staging: bool,

    /// Keep the cloned target branch after the run
    #[arg(long)]
    pub keep_staging: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub cpd: CpdArgs,

    /// Run only these checks (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<CheckId>,

    /// Skip these checks (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub skip: Vec<CheckId>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when any warning is emitted
    #[arg(long)]
    pub fail_on_warning: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".cpd-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration after merging file and flags
    Show(ConfigShowArgs),
}

#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub cpd: CpdArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
