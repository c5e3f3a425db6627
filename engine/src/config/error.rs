//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or validating a [`LocomotionConfig`](super::LocomotionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The tuning file could not be read.
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tuning file is not valid JSON for the config schema.
    #[error("failed to parse tuning json: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed fine but breaks a precondition of the locomotion core.
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
