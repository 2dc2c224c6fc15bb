//! Scenario error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario {scenario}: no scene configured")]
    MissingScene { scenario: String },

    #[error("failed to read scene {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scenario setup failed: {0}")]
    Setup(String),

    #[error("scenario {scenario}: {message}")]
    AssertionFailed { scenario: String, message: String },
}

impl ScenarioError {
    pub fn missing_scene(scenario: impl Into<String>) -> Self {
        Self::MissingScene {
            scenario: scenario.into(),
        }
    }

    pub fn file_read(path: &Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup(message.into())
    }

    pub fn assertion_failed(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            scenario: scenario.into(),
            message: message.into(),
        }
    }
}

/// Result type for scenarios.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
