//! BDK-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, BdkError>;

/// Top-level error type for Badger's Kitchen.
#[derive(Debug, Error)]
pub enum BdkError {
    #[error("[BDK-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[BDK-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[BDK-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[BDK-1101] invalid menu: {details}")]
    InvalidMenu { details: String },

    #[error("[BDK-1102] missing menu file: {path}")]
    MissingMenu { path: PathBuf },

    #[error("[BDK-2001] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[BDK-3001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[BDK-3101] terminal failure: {details}")]
    Terminal { details: String },

    #[error("[BDK-3900] runtime failure: {details}")]
    Runtime { details: String },
}

impl BdkError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "BDK-1001",
            Self::MissingConfig { .. } => "BDK-1002",
            Self::ConfigParse { .. } => "BDK-1003",
            Self::InvalidMenu { .. } => "BDK-1101",
            Self::MissingMenu { .. } => "BDK-1102",
            Self::Serialization { .. } => "BDK-2001",
            Self::Io { .. } => "BDK-3001",
            Self::Terminal { .. } => "BDK-3101",
            Self::Runtime { .. } => "BDK-3900",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for terminal-layer failures.
    #[must_use]
    pub fn terminal(source: &std::io::Error) -> Self {
        Self::Terminal {
            details: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for BdkError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for BdkError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
