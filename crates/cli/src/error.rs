//! Error types for bedctl

use bedcomp_probe::ProbeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Probe points not ready: {0}")]
    NotReady(String),

    #[error("Bed fit rejected: {0}")]
    FitRejected(#[from] ProbeError),

    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotReady(_) => 2,
            Self::FitRejected(_) => 3,
            Self::InvalidSession(_) | Self::JsonError(_) | Self::YamlError(_) => 4,
            Self::IoError(_) => 1,
        }
    }
}
