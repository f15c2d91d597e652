use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level key of the CodePipeline job invocation envelope.
pub const JOB_ENVELOPE_KEY: &str = "CodePipeline.job";
pub const USER_PARAMETERS_POINTER: &str = "/data/actionConfiguration/configuration/UserParameters";
pub const JOB_FAILED_TYPE: &str = "JobFailed";
pub const FAILURE_MESSAGE_PREFIX: &str = "Function exception: ";
pub const NOTIFICATION_SENT_STATUS: &str = "Sent a message to an Amazon SNS topic.";
/// CodePipeline rejects failure messages longer than this.
pub const MAX_FAILURE_MESSAGE_CHARS: usize = 5_000;

/// The fields of a pipeline job invocation the semver stage consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobPayload {
    pub job_id: String,
    pub user_parameters: Option<String>,
}

impl JobPayload {
    pub fn new(job_id: impl Into<String>, user_parameters: Option<&str>) -> Self {
        Self {
            job_id: job_id.into(),
            user_parameters: user_parameters.map(str::to_string),
        }
    }

    /// Reads the job id and raw user parameters out of a CodePipeline event.
    ///
    /// Returns `None` only when the job id itself is missing: without it there
    /// is no job to report on. Absent user parameters are left for the decoder
    /// to reject.
    pub fn from_event(event: &Value) -> Option<Self> {
        let job = event.get(JOB_ENVELOPE_KEY)?;
        let job_id = job
            .get("id")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|id| !id.is_empty())?;
        let user_parameters = job
            .pointer(USER_PARAMETERS_POINTER)
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self {
            job_id: job_id.to_string(),
            user_parameters,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserParameters {
    pub repo: String,
    pub branch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobOutcome {
    Success,
    Failure(String),
}

impl JobOutcome {
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self::Failure(format!("{FAILURE_MESSAGE_PREFIX}{error}"))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure(_) => "failure",
        }
    }

    /// Status string handed back to the Lambda harness once reported.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Success => "Complete.",
            Self::Failure(_) => "Failed.",
        }
    }
}

/// Failure details attached to a `PutJobFailureResult` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailureDetails {
    pub message: String,
    #[serde(rename = "type")]
    pub failure_type: String,
}

impl FailureDetails {
    pub fn job_failed(message: &str) -> Self {
        Self {
            message: message.chars().take(MAX_FAILURE_MESSAGE_CHARS).collect(),
            failure_type: JOB_FAILED_TYPE.to_string(),
        }
    }
}

/// CodeBuild "Build State Change" event as delivered by EventBridge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildStateEvent {
    pub detail: BuildStateDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BuildStateDetail {
    pub build_status: String,
    pub project_name: String,
    pub build_id: String,
    pub additional_information: AdditionalInformation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdditionalInformation {
    pub initiator: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildNotification {
    pub subject: String,
    pub message: String,
}

impl BuildNotification {
    pub fn from_detail(detail: &BuildStateDetail) -> Self {
        let project = &detail.project_name;
        let status = &detail.build_status;
        Self {
            subject: format!("{project}: {status}"),
            message: format!(
                "Project: {project} \nStatus: {status} \nBuild Id: {}",
                detail.build_id
            ),
        }
    }
}
