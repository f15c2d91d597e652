use simple_cicd_core::contract::{FailureDetails, JobOutcome};
use simple_cicd_core::error::ReportError;

use crate::adapters::job_status::JobStatusClient;

const COMPONENT: &str = "job_reporter";

/// Delivers the single outcome report of a pipeline job.
pub struct JobReporter<'a, J: ?Sized> {
    client: &'a J,
}

impl<'a, J: JobStatusClient + ?Sized> JobReporter<'a, J> {
    pub fn new(client: &'a J) -> Self {
        Self { client }
    }

    pub fn report(&self, job_id: &str, outcome: &JobOutcome) -> Result<(), ReportError> {
        match outcome {
            JobOutcome::Success => self.report_success(job_id),
            JobOutcome::Failure(message) => self.report_failure(job_id, message),
        }
    }

    pub fn report_success(&self, job_id: &str) -> Result<(), ReportError> {
        tracing::info!(component = COMPONENT, event = "putting_job_success", job_id);
        self.client
            .put_job_success(job_id)
            .map_err(|message| ReportError {
                outcome: JobOutcome::Success,
                message,
            })
    }

    pub fn report_failure(&self, job_id: &str, message: &str) -> Result<(), ReportError> {
        tracing::info!(
            component = COMPONENT,
            event = "putting_job_failure",
            job_id,
            failure_message = message
        );
        self.client
            .put_job_failure(job_id, &FailureDetails::job_failed(message))
            .map_err(|error| ReportError {
                outcome: JobOutcome::Failure(message.to_string()),
                message: error,
            })
    }
}
