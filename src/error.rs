use thiserror::Error;
use crate::services::{ReportError, RosterError, SurveyError};

/// Errors that abort a batch run
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid settings: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Survey(#[from] SurveyError),

    #[error("Failed to write summary {path}: {source}")]
    Summary {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
