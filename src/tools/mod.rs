//! External programs the duplication comparison depends on.

mod command;
#[cfg(test)]
pub(crate) mod fake;
mod process;

use std::path::Path;

use crate::Result;
use crate::config::Language;

pub use command::{
    AnalysisCommand, CloneCommand, DUPLICATION_MARKER, GIT_PROGRAM, PMD_PROGRAM,
    count_duplications, github_clone_url,
};
pub use process::ProcessTool;

/// The copy/paste detector and version-control client, as one capability.
pub trait ExternalTool {
    /// Whether the copy/paste detector can be located. Never fails.
    fn is_available(&self) -> bool;

    /// Run the detector over `path` and return the number of duplications found.
    ///
    /// # Errors
    /// Returns an error if the detector cannot be started or reports a failure.
    fn run_analysis(&self, path: &Path, language: &Language, minimum_tokens: u32) -> Result<usize>;

    /// Shallow-clone `branch` of the GitHub repository `repository` into `destination`.
    ///
    /// # Errors
    /// Returns an error if the clone cannot be started or fails.
    fn fetch_branch(&self, repository: &str, branch: &str, destination: &Path) -> Result<()>;
}

impl<T: ExternalTool + ?Sized> ExternalTool for &T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn run_analysis(&self, path: &Path, language: &Language, minimum_tokens: u32) -> Result<usize> {
        (**self).run_analysis(path, language, minimum_tokens)
    }

    fn fetch_branch(&self, repository: &str, branch: &str, destination: &Path) -> Result<()> {
        (**self).fetch_branch(repository, branch, destination)
    }
}
