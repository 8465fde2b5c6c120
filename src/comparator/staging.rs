//! The local directory the comparison branch is cloned into.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::StagingMode;
use crate::{CpdGuardError, Result};

/// Owns the staging checkout for the duration of one comparison.
///
/// The directory is removed on drop unless `keep` is set. A fixed staging
/// directory that already exists is never touched: preparing fails instead.
#[derive(Debug)]
pub struct StagingCheckout {
    path: PathBuf,
    keep: bool,
}

impl StagingCheckout {
    /// Reserve the staging location for `mode`.
    ///
    /// # Errors
    /// Returns a staging error if the fixed directory already exists, or an
    /// IO error if a unique directory cannot be created.
    pub fn prepare(mode: &StagingMode, keep: bool) -> Result<Self> {
        let path = match mode {
            StagingMode::Fixed(path) => {
                if path.exists() {
                    return Err(CpdGuardError::Staging {
                        path: path.clone(),
                        reason: "already exists; refusing to clone over it".to_string(),
                    });
                }
                path.clone()
            }
            StagingMode::Unique(base) => Self::create_unique(base)?,
        };
        tracing::debug!(path = %path.display(), keep, "prepared staging checkout");
        Ok(Self { path, keep })
    }

    fn create_unique(base: &Path) -> Result<PathBuf> {
        let parent = base
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = base
            .file_name()
            .map_or_else(|| "target-branch".into(), |n| n.to_string_lossy());
        let dir = tempfile::Builder::new()
            .prefix(&format!("{name}-"))
            .tempdir_in(parent)
            .map_err(|e| CpdGuardError::Staging {
                path: base.to_path_buf(),
                reason: format!("cannot create unique staging directory: {e}"),
            })?;
        Ok(dir.keep())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingCheckout {
    fn drop(&mut self) {
        if self.keep || !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove staging checkout");
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn fixed_staging_is_not_created_up_front() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target-branch");

        let staging = StagingCheckout::prepare(&StagingMode::Fixed(target.clone()), false).unwrap();

        assert_eq!(staging.path(), target);
        assert!(!target.exists());
    }

    #[test]
    fn existing_fixed_staging_is_rejected_and_left_alone() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target-branch");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "mine").unwrap();

        let err = StagingCheckout::prepare(&StagingMode::Fixed(target.clone()), false).unwrap_err();

        assert!(matches!(err, CpdGuardError::Staging { .. }));
        assert!(target.join("keep.txt").exists());
    }

    #[test]
    fn drop_removes_checkout() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target-branch");
        {
            let staging =
                StagingCheckout::prepare(&StagingMode::Fixed(target.clone()), false).unwrap();
            fs::create_dir_all(staging.path().join("App")).unwrap();
        }
        assert!(!target.exists());
    }

    #[test]
    fn keep_leaves_checkout_on_disk() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target-branch");
        {
            let staging =
                StagingCheckout::prepare(&StagingMode::Fixed(target.clone()), true).unwrap();
            fs::create_dir_all(staging.path()).unwrap();
        }
        assert!(target.exists());
    }

    #[test]
    fn unique_staging_creates_fresh_directories() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("target-branch");
        let mode = StagingMode::Unique(base);

        let first = StagingCheckout::prepare(&mode, false).unwrap();
        let second = StagingCheckout::prepare(&mode, false).unwrap();

        assert_ne!(first.path(), second.path());
        assert!(first.path().is_dir());
        let name = first.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("target-branch-"));
        assert_eq!(first.path().parent(), Some(dir.path()));

        let first_path = first.path().to_path_buf();
        drop(first);
        assert!(!first_path.exists());
    }
}
