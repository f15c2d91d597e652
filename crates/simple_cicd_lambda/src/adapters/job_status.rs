use simple_cicd_core::contract::FailureDetails;

/// Outcome channel back to the pipeline orchestrator.
pub trait JobStatusClient {
    fn put_job_success(&self, job_id: &str) -> Result<(), String>;

    fn put_job_failure(&self, job_id: &str, details: &FailureDetails) -> Result<(), String>;
}
