//! Command lines for the external programs.
//!
//! Each command knows its argument vector (what actually gets executed) and
//! renders a shell-equivalent string for logs and error messages.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use crate::config::Language;

pub const PMD_PROGRAM: &str = "pmd";
pub const GIT_PROGRAM: &str = "git";

/// Every CPD finding line carries this marker, e.g.
/// `Found a 12 line (104 tokens) duplication in the following files:`.
pub const DUPLICATION_MARKER: &str = "tokens";

/// Number of duplication findings in CPD's text report.
#[must_use]
pub fn count_duplications(report: &str) -> usize {
    report
        .lines()
        .filter(|line| line.contains(DUPLICATION_MARKER))
        .count()
}

/// GitHub clone URL for an `owner/name` slug.
#[must_use]
pub fn github_clone_url(repository: &str) -> String {
    format!("https://github.com/{repository}.git")
}

/// `pmd cpd` over one folder, ignoring identifier names.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisCommand<'a> {
    pub files: &'a Path,
    pub language: &'a Language,
    pub minimum_tokens: u32,
}

impl AnalysisCommand<'_> {
    /// Arguments after the `pmd` program name.
    #[must_use]
    pub fn args(&self) -> Vec<OsString> {
        vec![
            "cpd".into(),
            "--language".into(),
            self.language.as_str().into(),
            "--minimum-tokens".into(),
            self.minimum_tokens.to_string().into(),
            "--files".into(),
            self.files.as_os_str().to_owned(),
            "--ignore-identifiers".into(),
        ]
    }
}

impl fmt::Display for AnalysisCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PMD_PROGRAM} cpd --language {} --minimum-tokens {} --files {} --ignore-identifiers | grep {DUPLICATION_MARKER} | wc -l",
            self.language,
            self.minimum_tokens,
            self.files.display()
        )
    }
}

/// Shallow single-branch `git clone` of a GitHub repository.
#[derive(Debug, Clone, Copy)]
pub struct CloneCommand<'a> {
    pub repository: &'a str,
    pub branch: &'a str,
    pub destination: &'a Path,
}

impl CloneCommand<'_> {
    /// Arguments after the `git` program name.
    #[must_use]
    pub fn args(&self) -> Vec<OsString> {
        vec![
            "clone".into(),
            "--depth".into(),
            "1".into(),
            github_clone_url(self.repository).into(),
            "--branch".into(),
            self.branch.into(),
            self.destination.as_os_str().to_owned(),
        ]
    }
}

impl fmt::Display for CloneCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{GIT_PROGRAM} clone --depth 1 {} --branch {} {}",
            github_clone_url(self.repository),
            self.branch,
            self.destination.display()
        )
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
