//! Error types for Horizon Slide.
//!
//! The animation engine itself never fails; only loading and storing the
//! configuration can.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Horizon Slide operations.
#[derive(Error, Debug)]
pub enum SlideError {
    /// The configuration file could not be read or written.
    #[error("failed to access configuration file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`SlideConfig`](crate::SlideConfig).
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The configuration parsed but holds a value outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No configuration directory could be determined for this user.
    #[error("no configuration directory available")]
    NoConfigDir,
}

impl SlideError {
    pub(crate) fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error means the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigIo { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// A specialized Result type for Horizon Slide operations.
pub type SlideResult<T> = std::result::Result<T, SlideError>;
