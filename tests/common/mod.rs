#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the cpd-guard binary.
#[macro_export]
macro_rules! cpd_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("cpd-guard"))
    };
}

/// A temporary project with fake `pmd` and `git` executables.
pub struct TestFixture {
    pub dir: TempDir,
    pub bin: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty project and an empty bin directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            bin: TempDir::new().expect("Failed to create bin directory"),
        }
    }

    /// Returns the path to the project directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the project directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a `.cpd-guard.toml` in the project directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".cpd-guard.toml", content);
    }

    /// Path of the log the fake `git` appends its arguments to.
    pub fn git_log(&self) -> PathBuf {
        self.bin.path().join("git.log")
    }

    /// Path of the log the fake `pmd` appends its arguments to.
    pub fn pmd_log(&self) -> PathBuf {
        self.bin.path().join("pmd.log")
    }

    /// Installs a fake `pmd` reporting `current` findings for the working tree
    /// and `target` findings for anything under `target-branch`.
    #[cfg(unix)]
    pub fn install_pmd(&self, current: usize, target: usize) {
        let body = format!(
            r#"echo "$@" >> '{log}'
case "$*" in
  *"--files target-branch"*) n={target} ;;
  *) n={current} ;;
esac
i=0
while [ "$i" -lt "$n" ]; do
  echo "Found a 10 line (120 tokens) duplication in the following files:"
  echo "Starting at line 1 of Foo.java"
  i=$((i + 1))
done
if [ "$n" -gt 0 ]; then exit 4; fi
exit 0"#,
            log = self.pmd_log().display()
        );
        self.install_script("pmd", &body);
    }

    /// Installs a fake `git` that logs its arguments and creates the clone destination.
    #[cfg(unix)]
    pub fn install_git(&self) {
        let body = format!(
            r#"echo "$@" >> '{log}'
for arg in "$@"; do last="$arg"; done
mkdir -p "$last""#,
            log = self.git_log().display()
        );
        self.install_script("git", &body);
    }

    /// Installs a fake `git` whose clone always fails.
    #[cfg(unix)]
    pub fn install_failing_git(&self) {
        self.install_script(
            "git",
            "echo \"fatal: repository 'https://github.com/x/y.git/' not found\" >&2\nexit 128",
        );
    }

    #[cfg(unix)]
    fn install_script(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
    }

    /// `PATH` with the fake bin directory first, system tools after it.
    pub fn path_env(&self) -> String {
        format!("{}:/usr/bin:/bin", self.bin.path().display())
    }

    /// `PATH` containing only the fake bin directory.
    pub fn isolated_path_env(&self) -> String {
        self.bin.path().display().to_string()
    }

    /// A command running in the project directory with the fake tools on `PATH`.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = cpd_guard!();
        cmd.current_dir(self.path())
            .env("PATH", self.path_env())
            .env("NO_COLOR", "1")
            .env_remove("GITHUB_REPOSITORY")
            .env_remove("TRAVIS_REPO_SLUG")
            .env_remove("CPD_GUARD_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const DUPLICATION_INCREASED: &str = "This PR has more duplicated code than your target branch, therefore it could have some code quality issues.";

pub const PMD_NOT_INSTALLED: &str =
    "PMD is not currently installed. Copy/Paste Detector can not be executed.";

/// Config for an ecmascript project under `App`.
pub const APP_CONFIG: &str = r#"
[cpd]
language = "ecmascript"
minimum_tokens = 500
folder = "App"
repository = "indigotech/danger"
branch = "release-1.0.0"
"#;
