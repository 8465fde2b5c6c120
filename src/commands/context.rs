//! Shared setup for commands: config loading and flag overrides.

use std::path::Path;

use crate::cli::{CheckArgs, CpdArgs};
use crate::config::{ChecksConfig, Config, ConfigLoader, CpdConfig, FileConfigLoader, LoadResult};
use crate::review::RunOptions;
use crate::Result;

/// Load configuration, honoring `--no-config` and an explicit `--config`.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Apply command-line flags on top of the `[cpd]` section.
pub fn apply_cpd_overrides(cpd: &mut CpdConfig, args: &CpdArgs) {
    if let Some(language) = &args.language {
        cpd.language = language.clone();
    }
    if let Some(minimum_tokens) = args.minimum_tokens {
        cpd.minimum_tokens = minimum_tokens;
    }
    if let Some(folder) = &args.folder {
        cpd.folder = Some(folder.clone());
    }
    if let Some(repository) = &args.repository {
        cpd.repository = Some(repository.clone());
    }
    if let Some(branch) = &args.branch {
        cpd.branch.clone_from(branch);
    }
    if let Some(staging_dir) = &args.staging_dir {
        cpd.staging_dir.clone_from(staging_dir);
    }
    if args.unique_staging {
        cpd.unique_staging = true;
    }
    if args.keep_staging {
        cpd.keep_staging = true;
    }
}

/// Check selection: `--only` replaces the file's list, `--skip` adds to its excludes.
#[must_use]
pub fn run_options(checks: &ChecksConfig, args: &CheckArgs) -> RunOptions {
    let only = if args.only.is_empty() {
        checks.only.clone()
    } else {
        args.only.clone()
    };
    let mut exclude = checks.exclude.clone();
    for check in &args.skip {
        if !exclude.contains(check) {
            exclude.push(*check);
        }
    }
    RunOptions { only, exclude }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
