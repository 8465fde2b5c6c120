use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpdGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to start `{program}`")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Staging directory error: {path}: {reason}")]
    Staging { path: PathBuf, reason: String },
}

impl CpdGuardError {
    /// Short category name used as the headline of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::TomlParse(_) | Self::TomlSerialize(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
            Self::Staging { .. } => "Staging",
            Self::CommandSpawn { .. } | Self::CommandFailed { .. } => "Command",
        }
    }

    /// The message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, source } => format!("{}: {source}", path.display()),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::TomlSerialize(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            Self::CommandSpawn { program, source } => format!("`{program}`: {source}"),
            Self::CommandFailed {
                command, status, ..
            } => format!("`{command}` exited with {status}"),
            Self::Staging { path, reason } => format!("{}: {reason}", path.display()),
        }
    }

    /// Additional detail worth printing below the message.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::CommandFailed { stderr, .. } if !stderr.trim().is_empty() => {
                Some(stderr.trim().to_string())
            }
            _ => None,
        }
    }

    /// An actionable hint for the user, when one is known.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check the config file format and the command-line options"),
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Verify the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check the file permissions"),
                _ => None,
            },
            Self::TomlParse(_) => Some("Check the TOML syntax of the config file"),
            Self::CommandSpawn { .. } => Some("Make sure the program is installed and on PATH"),
            Self::CommandFailed { .. } => {
                Some("Run the command by hand to see its full output")
            }
            Self::Staging { .. } => Some(
                "Remove the directory, choose another staging_dir, or pass --unique-staging",
            ),
            Self::Io(_) | Self::TomlSerialize(_) | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CpdGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
