//! Review checks run against a pull request's working tree.

mod report;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::comparator::{DuplicationComparator, DuplicationComparison};
use crate::tools::ExternalTool;

pub use report::{Report, Warning};

pub const DUPLICATION_INCREASED: &str = "This PR has more duplicated code than your target branch, therefore it could have some code quality issues.";

pub const PMD_NOT_INSTALLED: &str =
    "PMD is not currently installed. Copy/Paste Detector can not be executed.";

/// Identifier of a registered check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    /// Copy/paste duplication compared with the target branch
    Duplication,
}

impl CheckId {
    /// Every check, in execution order.
    pub const ALL: &'static [Self] = &[Self::Duplication];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Duplication => "duplication",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives the outcome of each check.
pub trait WarningSink {
    fn warn(&mut self, check: CheckId, message: &str);

    /// Counts behind a duplication verdict, for sinks that report them.
    fn comparison(&mut self, _comparison: DuplicationComparison) {}
}

/// Which registered checks a run includes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Run only these. Empty means all.
    pub only: Vec<CheckId>,
    /// Never run these.
    pub exclude: Vec<CheckId>,
}

impl RunOptions {
    #[must_use]
    pub fn selects(&self, check: CheckId) -> bool {
        (self.only.is_empty() || self.only.contains(&check)) && !self.exclude.contains(&check)
    }
}

/// Runs every selected check once and reports warnings to a [`WarningSink`].
#[derive(Debug)]
pub struct ReviewCheck<T> {
    comparator: DuplicationComparator<T>,
}

impl<T: ExternalTool> ReviewCheck<T> {
    #[must_use]
    pub const fn new(comparator: DuplicationComparator<T>) -> Self {
        Self { comparator }
    }

    #[must_use]
    pub const fn comparator(&self) -> &DuplicationComparator<T> {
        &self.comparator
    }

    /// Run the selected checks in registry order and return the ones executed.
    ///
    /// # Errors
    /// The first check error aborts the run and is returned unchanged.
    pub fn run(&self, options: &RunOptions, sink: &mut dyn WarningSink) -> Result<Vec<CheckId>> {
        let mut executed = Vec::with_capacity(CheckId::ALL.len());
        for &check in CheckId::ALL {
            if !options.selects(check) {
                tracing::debug!(%check, "check skipped");
                continue;
            }
            tracing::debug!(%check, "running check");
            self.run_check(check, sink)?;
            executed.push(check);
        }
        Ok(executed)
    }

    fn run_check(&self, check: CheckId, sink: &mut dyn WarningSink) -> Result<()> {
        match check {
            CheckId::Duplication => self.duplication_check(sink),
        }
    }

    fn duplication_check(&self, sink: &mut dyn WarningSink) -> Result<()> {
        if !self.comparator.is_tool_available() {
            sink.warn(CheckId::Duplication, PMD_NOT_INSTALLED);
            return Ok(());
        }

        let comparison = self.comparator.compare()?;
        sink.comparison(comparison);
        if comparison.exceeded() {
            sink.warn(CheckId::Duplication, DUPLICATION_INCREASED);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
