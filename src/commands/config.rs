use serde::Serialize;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigFormat, ConfigShowArgs};
use crate::config::{ChainResolver, ChecksConfig, ComparisonConfig, Config, RepositoryResolver};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::color_mode;
use super::context::{apply_cpd_overrides, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Show(show) => run_config_show_impl(show, cli),
    };
    match result {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(color_mode(cli.color)).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the config file cannot be loaded or serialized.
pub fn run_config_show_impl(args: &ConfigShowArgs, cli: &Cli) -> Result<String> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?.config;
    apply_cpd_overrides(&mut config.cpd, &args.cpd);
    render_effective(config, &ChainResolver::standard(), args.format)
}

#[derive(Serialize)]
struct EffectiveConfig {
    cpd: crate::config::CpdConfig,
    checks: ChecksConfig,
}

/// Serialize `config` with the repository slug resolved.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_effective(
    config: Config,
    resolver: &dyn RepositoryResolver,
    format: ConfigFormat,
) -> Result<String> {
    let resolved = ComparisonConfig::from_cpd_config(&config.cpd, resolver);
    let mut cpd = config.cpd;
    cpd.repository = resolved.repository;
    let effective = EffectiveConfig {
        cpd,
        checks: config.checks,
    };
    Ok(match format {
        ConfigFormat::Toml => toml::to_string_pretty(&effective)?,
        ConfigFormat::Json => {
            let mut json = serde_json::to_string_pretty(&effective)?;
            json.push('\n');
            json
        }
    })
}
