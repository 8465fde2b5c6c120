use std::path::Path;

use crate::cli::{CheckArgs, Cli};
use crate::comparator::DuplicationComparator;
use crate::config::{ChainResolver, ComparisonConfig};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::review::{Report, ReviewCheck, RunOptions};
use crate::tools::{ExternalTool, ProcessTool};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_WARNINGS, Result};

use super::color_mode;
use super::context::{apply_cpd_overrides, load_config, run_options};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_mode(cli.color)).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads configuration, runs the review checks and writes the report.
///
/// # Errors
/// Returns an error if configuration is invalid, a check fails, or the
/// report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "using configuration file");
    }
    let mut config = loaded.config;

    // 2. Apply CLI argument overrides
    apply_cpd_overrides(&mut config.cpd, &args.cpd);
    let options = run_options(&config.checks, args);

    // 3. Resolve the comparison and run the checks
    let comparison = ComparisonConfig::from_cpd_config(&config.cpd, &ChainResolver::standard());
    let report = execute_review(comparison, ProcessTool::new(), &options)?;

    // 4. Format and write output
    let output = format_report(args.format, &report, color_mode(cli.color), cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code(&report, args.fail_on_warning))
}

/// Runs the selected checks against `tool` and collects their warnings.
///
/// # Errors
/// Propagates the first check failure.
pub fn execute_review<T: ExternalTool>(
    config: ComparisonConfig,
    tool: T,
    options: &RunOptions,
) -> Result<Report> {
    let review = ReviewCheck::new(DuplicationComparator::new(config, tool));
    let mut report = Report::new();
    let executed = review.run(options, &mut report)?;
    report.executed = executed;
    Ok(report)
}

fn format_report(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        std::fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[must_use]
pub fn exit_code(report: &Report, fail_on_warning: bool) -> i32 {
    if fail_on_warning && report.has_warnings() {
        EXIT_WARNINGS
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
