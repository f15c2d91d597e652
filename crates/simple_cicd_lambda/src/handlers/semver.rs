use serde_json::Value;
use simple_cicd_core::config::SemverConfig;
use simple_cicd_core::contract::{JobOutcome, JobPayload};
use simple_cicd_core::error::{JobError, ReportError};
use simple_cicd_core::parameters::decode_user_parameters;
use simple_cicd_core::version::bump_patch;
use thiserror::Error;

use crate::adapters::job_status::JobStatusClient;
use crate::adapters::parameter_store::ParameterStore;
use crate::reporter::JobReporter;
use crate::repository::VersionRepository;

const COMPONENT: &str = "semver_handler";

/// Failures that escape to the Lambda harness instead of the orchestrator.
#[derive(Debug, Error)]
pub enum SemverHandlerError {
    #[error("CodePipeline job id missing from invocation event")]
    MissingJobId,

    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBump {
    pub key: String,
    pub previous: String,
    pub next: String,
}

/// Patch-bump pipeline stage.
///
/// Each job is decoded, its version bumped and stored, and the outcome
/// reported to the orchestrator exactly once. Everything up to the report
/// becomes a `JobFailed` report; only a missing job id or a failed report
/// reaches the caller as an error.
pub struct SemverHandler<'a, S: ?Sized, J: ?Sized> {
    repository: VersionRepository<'a, S>,
    reporter: JobReporter<'a, J>,
}

impl<'a, S, J> SemverHandler<'a, S, J>
where
    S: ParameterStore + ?Sized,
    J: JobStatusClient + ?Sized,
{
    pub fn new(config: &'a SemverConfig, store: &'a S, job_status: &'a J) -> Self {
        Self {
            repository: VersionRepository::new(store, &config.ssm_root),
            reporter: JobReporter::new(job_status),
        }
    }

    pub fn handle_event(&self, event: &Value) -> Result<&'static str, SemverHandlerError> {
        let Some(payload) = JobPayload::from_event(event) else {
            tracing::error!(component = COMPONENT, event = "job_id_missing");
            return Err(SemverHandlerError::MissingJobId);
        };

        let outcome = self.handle_job(&payload)?;
        Ok(outcome.status())
    }

    pub fn handle_job(&self, payload: &JobPayload) -> Result<JobOutcome, ReportError> {
        let job_id = payload.job_id.as_str();
        tracing::info!(component = COMPONENT, event = "job_started", job_id);

        let outcome = match self.increment_version(payload) {
            Ok(bump) => {
                tracing::info!(
                    component = COMPONENT,
                    event = "version_bumped",
                    job_id,
                    key = %bump.key,
                    previous = %bump.previous,
                    next = %bump.next
                );
                JobOutcome::Success
            }
            Err(error) => {
                tracing::warn!(
                    component = COMPONENT,
                    event = "job_failed",
                    job_id,
                    error = %error
                );
                JobOutcome::failure(&error)
            }
        };

        if let Err(error) = self.reporter.report(job_id, &outcome) {
            tracing::error!(
                component = COMPONENT,
                event = "job_report_failed",
                job_id,
                outcome = outcome.label(),
                error = %error
            );
            return Err(error);
        }

        tracing::info!(
            component = COMPONENT,
            event = "job_reported",
            job_id,
            outcome = outcome.label()
        );
        Ok(outcome)
    }

    fn increment_version(&self, payload: &JobPayload) -> Result<VersionBump, JobError> {
        let params = decode_user_parameters(payload.user_parameters.as_deref())?;
        let previous = self.repository.get(&params.repo, &params.branch)?;
        let next = bump_patch(&previous)?;
        self.repository.set(&params.repo, &params.branch, &next)?;

        Ok(VersionBump {
            key: self.repository.key(&params.repo, &params.branch),
            previous,
            next,
        })
    }
}
