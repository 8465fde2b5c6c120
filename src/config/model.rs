use serde::{Deserialize, Serialize};

use crate::review::CheckId;

use super::Language;

/// Default minimum duplicate size passed to `--minimum-tokens`.
pub const DEFAULT_MINIMUM_TOKENS: u32 = 100;

/// Default comparison branch.
pub const DEFAULT_BRANCH: &str = "master";

/// Default staging checkout directory for the comparison branch.
pub const DEFAULT_STAGING_DIR: &str = "target-branch";

/// Top-level `.cpd-guard.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub cpd: CpdConfig,

    #[serde(default)]
    pub checks: ChecksConfig,
}

/// `[cpd]` section: how the duplication comparison runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CpdConfig {
    /// CPD language (default: java).
    #[serde(default)]
    pub language: Language,

    /// Minimum duplicate size in tokens (default: 100).
    #[serde(default = "default_minimum_tokens")]
    pub minimum_tokens: u32,

    /// Source folder to analyze, relative to the repository root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Repository slug (`owner/name`) the comparison branch is cloned from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Comparison branch (default: master).
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Directory the comparison branch is cloned into.
    #[serde(default = "default_staging_dir")]
    pub staging_dir: String,

    /// Clone into a fresh `<staging_dir>-XXXXXX` directory on every run.
    #[serde(default)]
    pub unique_staging: bool,

    /// Leave the staging checkout on disk after the comparison.
    #[serde(default)]
    pub keep_staging: bool,
}

impl Default for CpdConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            minimum_tokens: DEFAULT_MINIMUM_TOKENS,
            folder: None,
            repository: None,
            branch: default_branch(),
            staging_dir: default_staging_dir(),
            unique_staging: false,
            keep_staging: false,
        }
    }
}

/// `[checks]` section: which review checks run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChecksConfig {
    /// Run only these checks. Empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub only: Vec<CheckId>,

    /// Never run these checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<CheckId>,
}

const fn default_minimum_tokens() -> u32 {
    DEFAULT_MINIMUM_TOKENS
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_staging_dir() -> String {
    DEFAULT_STAGING_DIR.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
