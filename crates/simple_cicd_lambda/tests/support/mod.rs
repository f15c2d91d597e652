#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Barrier, Mutex};

use serde_json::{json, Value};
use simple_cicd_core::config::SemverConfig;
use simple_cicd_core::contract::FailureDetails;
use simple_cicd_core::error::ParameterStoreError;
use simple_cicd_lambda::adapters::job_status::JobStatusClient;
use simple_cicd_lambda::adapters::parameter_store::ParameterStore;

pub const SSM_ROOT: &str = "/acme/cicd";

pub fn semver_config() -> SemverConfig {
    SemverConfig {
        ssm_root: SSM_ROOT.to_string(),
    }
}

pub fn version_key(repo: &str, branch: &str) -> String {
    format!("{SSM_ROOT}/simple-cicd/{repo}/{branch}/version")
}

pub fn job_event(job_id: &str, user_parameters: &str) -> Value {
    json!({
        "CodePipeline.job": {
            "id": job_id,
            "accountId": "111111111111",
            "data": {
                "actionConfiguration": {
                    "configuration": {
                        "FunctionName": "acme-cicd-semverHandler",
                        "UserParameters": user_parameters
                    }
                },
                "inputArtifacts": [],
                "outputArtifacts": []
            }
        }
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Get(String),
    Put { key: String, value: String, overwrite: bool },
}

/// In-memory Parameter Store with a call log and write-failure injection.
pub struct InMemoryParameterStore {
    values: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<StoreCall>>,
    fail_writes: bool,
    read_barrier: Option<Barrier>,
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            fail_writes: false,
            read_barrier: None,
        }
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .lock()
            .expect("poisoned mutex")
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Holds every reader after its read until `readers` reads have happened.
    pub fn with_read_barrier(mut self, readers: usize) -> Self {
        self.read_barrier = Some(Barrier::new(readers));
        self
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().expect("poisoned mutex").get(key).cloned()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().expect("poisoned mutex").clone()
    }

    pub fn put_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, StoreCall::Put { .. }))
            .count()
    }
}

impl ParameterStore for InMemoryParameterStore {
    fn get_parameter(&self, key: &str) -> Result<String, ParameterStoreError> {
        self.calls
            .lock()
            .expect("poisoned mutex")
            .push(StoreCall::Get(key.to_string()));
        let value = self.value(key);

        if let Some(barrier) = &self.read_barrier {
            barrier.wait();
        }

        value.ok_or_else(|| ParameterStoreError::NotFound(key.to_string()))
    }

    fn put_parameter(
        &self,
        key: &str,
        value: &str,
        overwrite: bool,
    ) -> Result<(), ParameterStoreError> {
        self.calls.lock().expect("poisoned mutex").push(StoreCall::Put {
            key: key.to_string(),
            value: value.to_string(),
            overwrite,
        });
        if self.fail_writes {
            return Err(ParameterStoreError::Unavailable(format!(
                "simulated write failure for key: {key}"
            )));
        }
        self.values
            .lock()
            .expect("poisoned mutex")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobReport {
    Success(String),
    Failure { job_id: String, details: FailureDetails },
}

pub struct RecordingJobStatus {
    reports: Mutex<Vec<JobReport>>,
}

impl RecordingJobStatus {
    pub fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
        }
    }

    pub fn reports(&self) -> Vec<JobReport> {
        self.reports.lock().expect("poisoned mutex").clone()
    }
}

impl JobStatusClient for RecordingJobStatus {
    fn put_job_success(&self, job_id: &str) -> Result<(), String> {
        self.reports
            .lock()
            .expect("poisoned mutex")
            .push(JobReport::Success(job_id.to_string()));
        Ok(())
    }

    fn put_job_failure(&self, job_id: &str, details: &FailureDetails) -> Result<(), String> {
        self.reports
            .lock()
            .expect("poisoned mutex")
            .push(JobReport::Failure {
                job_id: job_id.to_string(),
                details: details.clone(),
            });
        Ok(())
    }
}
