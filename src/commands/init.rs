use std::fs;

use crate::cli::InitArgs;
use crate::{CpdGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            crate::output::ErrorOutput::stderr().print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CpdGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# cpd-guard configuration file

[cpd]
# Language passed to `pmd cpd --language` (cpp, cs, java, php, ruby, ecmascript, ...)
language = "java"

# Minimum duplicate size in tokens (default: 100)
minimum_tokens = 100

# Source folder to analyze, relative to the repository root (required)
# folder = "src/main/java"

# Repository slug the target branch is cloned from.
# Defaults to $GITHUB_REPOSITORY, then $TRAVIS_REPO_SLUG, then the origin remote.
# repository = "owner/name"

# Branch to compare against (default: master)
branch = "master"

# Where the target branch is cloned (default: target-branch)
# staging_dir = "target-branch"

# Clone into a fresh directory per run, safe for concurrent runs
# unique_staging = true

# Keep the clone after the run
# keep_staging = true

[checks]
# Run only these checks (empty = all)
# only = ["duplication"]

# Never run these checks
# exclude = []
"#
    .to_string()
}
