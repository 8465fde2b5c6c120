use std::path::{Component, Path, PathBuf};

use crate::{CpdGuardError, Result};

use super::model::{DEFAULT_BRANCH, DEFAULT_MINIMUM_TOKENS, DEFAULT_STAGING_DIR};
use super::repository::{RepositoryResolver, is_valid_slug};
use super::{CpdConfig, Language};

/// Where the comparison branch gets cloned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagingMode {
    /// Always the same directory. Concurrent runs in one working directory collide.
    Fixed(PathBuf),
    /// A fresh directory per run, named `<prefix>-XXXXXX`, created next to `prefix`.
    Unique(PathBuf),
}

impl StagingMode {
    #[must_use]
    pub fn base(&self) -> &Path {
        match self {
            Self::Fixed(path) | Self::Unique(path) => path,
        }
    }
}

impl Default for StagingMode {
    fn default() -> Self {
        Self::Fixed(PathBuf::from(DEFAULT_STAGING_DIR))
    }
}

/// Fully resolved options for one duplication comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    pub language: Language,
    pub minimum_tokens: u32,
    pub folder: Option<PathBuf>,
    pub repository: Option<String>,
    pub branch: String,
    pub staging: StagingMode,
    pub keep_staging: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            minimum_tokens: DEFAULT_MINIMUM_TOKENS,
            folder: None,
            repository: None,
            branch: DEFAULT_BRANCH.to_string(),
            staging: StagingMode::default(),
            keep_staging: false,
        }
    }
}

impl ComparisonConfig {
    /// Build from the `[cpd]` section. An unset repository is filled from `resolver`.
    #[must_use]
    pub fn from_cpd_config(cpd: &CpdConfig, resolver: &dyn RepositoryResolver) -> Self {
        let repository = cpd
            .repository
            .clone()
            .filter(|r| !r.trim().is_empty())
            .or_else(|| resolver.resolve());

        let staging_base = PathBuf::from(&cpd.staging_dir);
        let staging = if cpd.unique_staging {
            StagingMode::Unique(staging_base)
        } else {
            StagingMode::Fixed(staging_base)
        };

        Self {
            language: cpd.language.clone(),
            minimum_tokens: cpd.minimum_tokens,
            folder: cpd.folder.as_ref().map(PathBuf::from),
            repository,
            branch: cpd.branch.clone(),
            staging,
            keep_staging: cpd.keep_staging,
        }
    }

    /// The configured folder, rejecting unset, empty, absolute or `..` values.
    ///
    /// # Errors
    /// Returns a configuration error if no folder is configured.
    pub fn require_folder(&self) -> Result<&Path> {
        let folder = self
            .folder
            .as_deref()
            .filter(|f| !f.as_os_str().is_empty())
            .ok_or_else(|| {
                CpdGuardError::Config(
                    "no source folder configured; set `folder` in [cpd] or pass --folder"
                        .to_string(),
                )
            })?;
        // The target run analyzes `{staging}/{folder}`, so the folder must stay inside it.
        let escapes = folder.components().any(|c| {
            matches!(
                c,
                Component::RootDir | Component::Prefix(_) | Component::ParentDir
            )
        });
        if escapes {
            return Err(CpdGuardError::Config(format!(
                "folder must be a relative path inside the repository, got `{}`",
                folder.display()
            )));
        }
        Ok(folder)
    }

    /// The repository slug, rejecting unset or malformed values.
    ///
    /// # Errors
    /// Returns a configuration error if the slug is missing or not `owner/name`.
    pub fn require_repository(&self) -> Result<&str> {
        let repository = self.repository.as_deref().ok_or_else(|| {
            CpdGuardError::Config(
                "no repository configured; set `repository` in [cpd], pass --repository, \
                 or set GITHUB_REPOSITORY"
                    .to_string(),
            )
        })?;
        if !is_valid_slug(repository) {
            return Err(CpdGuardError::Config(format!(
                "repository must look like `owner/name`, got `{repository}`"
            )));
        }
        Ok(repository)
    }

    /// Check everything a comparison needs before any process is started.
    ///
    /// # Errors
    /// Returns a configuration error describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.minimum_tokens == 0 {
            return Err(CpdGuardError::Config(
                "minimum_tokens must be a positive integer".to_string(),
            ));
        }
        if self.branch.trim().is_empty() || self.branch.starts_with('-') {
            return Err(CpdGuardError::Config(format!(
                "invalid comparison branch `{}`",
                self.branch
            )));
        }
        if self.staging.base().as_os_str().is_empty() {
            return Err(CpdGuardError::Config(
                "staging_dir must not be empty".to_string(),
            ));
        }
        self.require_folder()?;
        self.require_repository()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "comparison_tests.rs"]
mod tests;
