use std::path::Path;
use std::process::{Command, Output};

use crate::config::Language;
use crate::{CpdGuardError, Result};

use super::ExternalTool;
use super::command::{
    AnalysisCommand, CloneCommand, GIT_PROGRAM, PMD_PROGRAM, count_duplications,
};

/// PMD exits with 4 when CPD found duplications; that is still a successful run.
const PMD_DUPLICATIONS_FOUND: i32 = 4;

/// [`ExternalTool`] backed by the real `pmd` and `git` executables.
#[derive(Debug, Clone)]
pub struct ProcessTool {
    pmd: String,
    git: String,
}

impl Default for ProcessTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTool {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pmd: PMD_PROGRAM.to_string(),
            git: GIT_PROGRAM.to_string(),
        }
    }

    /// Use a different PMD launcher (e.g. `pmd-bin-7.0.0/bin/pmd`).
    #[must_use]
    pub fn with_pmd_program(mut self, program: impl Into<String>) -> Self {
        self.pmd = program.into();
        self
    }

    #[must_use]
    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git = program.into();
        self
    }

    fn spawn(program: &str, command: &mut Command) -> Result<Output> {
        command.output().map_err(|source| CpdGuardError::CommandSpawn {
            program: program.to_string(),
            source,
        })
    }

    fn failed(rendered: String, output: &Output) -> CpdGuardError {
        CpdGuardError::CommandFailed {
            command: rendered,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl ExternalTool for ProcessTool {
    fn is_available(&self) -> bool {
        which::which(&self.pmd).is_ok_and(|path| !path.as_os_str().is_empty())
    }

    fn run_analysis(&self, path: &Path, language: &Language, minimum_tokens: u32) -> Result<usize> {
        let analysis = AnalysisCommand {
            files: path,
            language,
            minimum_tokens,
        };
        tracing::debug!(command = %analysis, "running copy/paste detector");

        let output = Self::spawn(&self.pmd, Command::new(&self.pmd).args(analysis.args()))?;
        let succeeded = output.status.success()
            || output.status.code() == Some(PMD_DUPLICATIONS_FOUND);
        if !succeeded {
            return Err(Self::failed(analysis.to_string(), &output));
        }

        let count = count_duplications(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(path = %path.display(), count, "copy/paste detector finished");
        Ok(count)
    }

    fn fetch_branch(&self, repository: &str, branch: &str, destination: &Path) -> Result<()> {
        let clone = CloneCommand {
            repository,
            branch,
            destination,
        };
        tracing::debug!(command = %clone, "fetching comparison branch");

        let output = Self::spawn(
            &self.git,
            Command::new(&self.git)
                .args(clone.args())
                .env("GIT_TERMINAL_PROMPT", "0"),
        )?;
        if !output.status.success() {
            return Err(Self::failed(clone.to_string(), &output));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
