use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CpdGuardError, Result};

use super::Config;

/// Result of loading a configuration, with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// The file the configuration was read from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load the first configuration file found, or the defaults.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or invalid.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".cpd-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Where config files are looked up and how they are read.
pub trait ConfigStore {
    /// Config file paths to try, most specific first.
    fn candidates(&self) -> Vec<PathBuf>;

    /// The file's contents, or `None` if it does not exist.
    ///
    /// # Errors
    /// Returns any read failure other than the file being absent.
    fn read(&self, path: &Path) -> std::io::Result<Option<String>>;
}

/// `.cpd-guard.toml` in the working directory, then `config.toml` in the
/// platform config directory (`~/.config/cpd-guard` on Linux).
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskConfigStore;

impl ConfigStore for DiskConfigStore {
    fn candidates(&self) -> Vec<PathBuf> {
        let local = std::env::current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME));
        let user = directories::ProjectDirs::from("", "", "cpd-guard")
            .map(|dirs| dirs.config_dir().join(USER_CONFIG_NAME));
        local.into_iter().chain(user).collect()
    }

    fn read(&self, path: &Path) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Loads the `[cpd]`/`[checks]` TOML file from a [`ConfigStore`].
#[derive(Debug)]
pub struct FileConfigLoader<S: ConfigStore = DiskConfigStore> {
    store: S,
}

impl Default for FileConfigLoader<DiskConfigStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<DiskConfigStore> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: DiskConfigStore,
        }
    }
}

impl<S: ConfigStore> FileConfigLoader<S> {
    #[must_use]
    pub const fn with_store(store: S) -> Self {
        Self { store }
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        self.store
            .read(path)
            .map_err(|source| CpdGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }

    fn parse(path: &Path, content: &str) -> Result<LoadResult> {
        let config = toml::from_str(content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl<S: ConfigStore> ConfigLoader for FileConfigLoader<S> {
    fn load(&self) -> Result<LoadResult> {
        for path in self.store.candidates() {
            if let Some(content) = self.read(&path)? {
                return Self::parse(&path, &content);
            }
        }
        Ok(LoadResult {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self.read(path)?.ok_or_else(|| CpdGuardError::FileRead {
            path: path.to_path_buf(),
            source: ErrorKind::NotFound.into(),
        })?;
        Self::parse(path, &content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
