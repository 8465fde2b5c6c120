//! Compares copy/paste duplication of the working tree against a comparison branch.

mod staging;

use serde::Serialize;

use crate::Result;
use crate::config::ComparisonConfig;
use crate::tools::ExternalTool;

pub use staging::StagingCheckout;

/// Duplication counts of both trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DuplicationComparison {
    /// Findings in the working tree.
    pub current: usize,
    /// Findings in the comparison branch.
    pub target: usize,
}

impl DuplicationComparison {
    /// Strictly more duplication than the comparison branch.
    #[must_use]
    pub const fn exceeded(&self) -> bool {
        self.current > self.target
    }
}

/// Runs the clone-and-analyze cycle for one [`ComparisonConfig`].
#[derive(Debug)]
pub struct DuplicationComparator<T> {
    config: ComparisonConfig,
    tool: T,
}

impl<T: ExternalTool> DuplicationComparator<T> {
    #[must_use]
    pub const fn new(config: ComparisonConfig, tool: T) -> Self {
        Self { config, tool }
    }

    #[must_use]
    pub const fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    #[must_use]
    pub const fn tool(&self) -> &T {
        &self.tool
    }

    /// Whether the copy/paste detector is installed.
    #[must_use]
    pub fn is_tool_available(&self) -> bool {
        self.tool.is_available()
    }

    /// Whether the working tree has more duplication than the comparison branch.
    ///
    /// # Errors
    /// See [`Self::compare`].
    pub fn increased(&self) -> Result<bool> {
        Ok(self.compare()?.exceeded())
    }

    /// Clone the comparison branch, analyze both trees and return their counts.
    ///
    /// The configuration is validated before any process is started.
    ///
    /// # Errors
    /// Returns an error if the configuration is incomplete, the staging
    /// directory is unusable, or the clone or either analysis fails.
    pub fn compare(&self) -> Result<DuplicationComparison> {
        self.config.validate()?;
        let folder = self.config.require_folder()?;
        let repository = self.config.require_repository()?;
        let language = &self.config.language;
        let minimum_tokens = self.config.minimum_tokens;

        let staging = StagingCheckout::prepare(&self.config.staging, self.config.keep_staging)?;
        self.tool
            .fetch_branch(repository, &self.config.branch, staging.path())?;

        let current = self.tool.run_analysis(folder, language, minimum_tokens)?;
        let target_files = staging.path().join(folder);
        let target = self
            .tool
            .run_analysis(&target_files, language, minimum_tokens)?;

        let comparison = DuplicationComparison { current, target };
        tracing::info!(
            current,
            target,
            branch = %self.config.branch,
            increased = comparison.exceeded(),
            "duplication compared"
        );
        Ok(comparison)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
