//! Scriptable [`ExternalTool`] for unit tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::config::Language;
use crate::{CpdGuardError, Result};

use super::ExternalTool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    IsAvailable,
    Fetch {
        repository: String,
        branch: String,
        destination: PathBuf,
    },
    Analysis {
        path: PathBuf,
        language: Language,
        minimum_tokens: u32,
    },
}

/// Analysis calls return `counts` in order: current tree first, then target.
#[derive(Debug, Default)]
pub struct FakeTool {
    pub available: bool,
    pub counts: Vec<usize>,
    pub fail_fetch: bool,
    pub fail_analysis: bool,
    pub create_destination: bool,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeTool {
    pub fn installed(current: usize, target: usize) -> Self {
        Self {
            available: true,
            counts: vec![current, target],
            ..Self::default()
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count_calls(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn analysis_calls(&self) -> usize {
        self.count_calls(|c| matches!(c, Call::Analysis { .. }))
    }
}

impl ExternalTool for FakeTool {
    fn is_available(&self) -> bool {
        self.calls.borrow_mut().push(Call::IsAvailable);
        self.available
    }

    fn run_analysis(&self, path: &Path, language: &Language, minimum_tokens: u32) -> Result<usize> {
        let index = self.analysis_calls();
        self.calls.borrow_mut().push(Call::Analysis {
            path: path.to_path_buf(),
            language: language.clone(),
            minimum_tokens,
        });
        if self.fail_analysis {
            return Err(CpdGuardError::CommandFailed {
                command: "pmd cpd".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "boom".to_string(),
            });
        }
        Ok(self.counts.get(index).copied().unwrap_or_default())
    }

    fn fetch_branch(&self, repository: &str, branch: &str, destination: &Path) -> Result<()> {
        self.calls.borrow_mut().push(Call::Fetch {
            repository: repository.to_string(),
            branch: branch.to_string(),
            destination: destination.to_path_buf(),
        });
        if self.fail_fetch {
            return Err(CpdGuardError::CommandFailed {
                command: "git clone".to_string(),
                status: "exit status: 128".to_string(),
                stderr: "fatal: repository not found".to_string(),
            });
        }
        if self.create_destination {
            std::fs::create_dir_all(destination)?;
        }
        Ok(())
    }
}
