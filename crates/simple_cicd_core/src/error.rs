use thiserror::Error;

use crate::contract::JobOutcome;

/// Failures that turn a pipeline job into a `JobFailed` report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    #[error("UserParameters could not be decoded as JSON")]
    Decode,

    #[error("Your UserParameters JSON must include the {}", .0.describe())]
    MissingField(RequiredField),

    #[error("Parameter not found: {0}")]
    NotFound(String),

    #[error("Parameter store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid version '{value}': {message}")]
    InvalidVersion { value: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Repo,
    Branch,
}

impl RequiredField {
    pub fn key(self) -> &'static str {
        match self {
            Self::Repo => "repo",
            Self::Branch => "branch",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Repo => "repo name",
            Self::Branch => "branch",
        }
    }
}

/// Errors surfaced by a Parameter Store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterStoreError {
    #[error("Parameter not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Unavailable(String),
}

impl From<ParameterStoreError> for JobError {
    fn from(error: ParameterStoreError) -> Self {
        match error {
            ParameterStoreError::NotFound(key) => Self::NotFound(key),
            ParameterStoreError::Unavailable(message) => Self::StoreUnavailable(message),
        }
    }
}

/// The orchestrator could not be told about a job outcome.
///
/// There is no second channel to the orchestrator, so this error must reach
/// the invocation harness instead of being folded into a job failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Put job {} notification failed: {message}", .outcome.label())]
pub struct ReportError {
    pub outcome: JobOutcome,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),

    #[error("{0} cannot be empty")]
    Empty(&'static str),
}
