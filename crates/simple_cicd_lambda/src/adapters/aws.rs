//! AWS SDK implementations of the adapter traits.
//!
//! Handlers are synchronous; each call here parks the current worker with
//! `block_in_place` and drives the SDK future on the ambient multi-thread
//! runtime that `lambda_runtime` runs on.

use std::future::Future;

use aws_sdk_codepipeline::types::{FailureDetails as PipelineFailureDetails, FailureType};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::ParameterType;
use simple_cicd_core::contract::FailureDetails;
use simple_cicd_core::error::ParameterStoreError;

use crate::adapters::job_status::JobStatusClient;
use crate::adapters::parameter_store::ParameterStore;
use crate::adapters::publisher::NotificationPublisher;

fn block_on_sdk<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

pub struct SsmParameterStore {
    client: aws_sdk_ssm::Client,
}

impl SsmParameterStore {
    pub fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }
}

impl ParameterStore for SsmParameterStore {
    fn get_parameter(&self, key: &str) -> Result<String, ParameterStoreError> {
        block_on_sdk(async {
            let output = self
                .client
                .get_parameter()
                .name(key)
                .with_decryption(false)
                .send()
                .await
                .map_err(|error| {
                    let not_found = error
                        .as_service_error()
                        .is_some_and(|service_error| service_error.is_parameter_not_found());
                    if not_found {
                        ParameterStoreError::NotFound(key.to_string())
                    } else {
                        ParameterStoreError::Unavailable(format!(
                            "failed to read parameter {key}: {}",
                            DisplayErrorContext(&error)
                        ))
                    }
                })?;

            output
                .parameter()
                .and_then(|parameter| parameter.value())
                .map(str::to_string)
                .ok_or_else(|| ParameterStoreError::NotFound(key.to_string()))
        })
    }

    fn put_parameter(
        &self,
        key: &str,
        value: &str,
        overwrite: bool,
    ) -> Result<(), ParameterStoreError> {
        block_on_sdk(async {
            self.client
                .put_parameter()
                .name(key)
                .value(value)
                .r#type(ParameterType::String)
                .overwrite(overwrite)
                .send()
                .await
                .map(|_| ())
                .map_err(|error| {
                    ParameterStoreError::Unavailable(format!(
                        "failed to write parameter {key}: {}",
                        DisplayErrorContext(&error)
                    ))
                })
        })
    }
}

pub struct CodePipelineJobStatus {
    client: aws_sdk_codepipeline::Client,
}

impl CodePipelineJobStatus {
    pub fn new(client: aws_sdk_codepipeline::Client) -> Self {
        Self { client }
    }
}

impl JobStatusClient for CodePipelineJobStatus {
    fn put_job_success(&self, job_id: &str) -> Result<(), String> {
        block_on_sdk(async {
            self.client
                .put_job_success_result()
                .job_id(job_id)
                .send()
                .await
                .map(|_| ())
                .map_err(|error| {
                    format!(
                        "failed to put job success result: {}",
                        DisplayErrorContext(&error)
                    )
                })
        })
    }

    fn put_job_failure(&self, job_id: &str, details: &FailureDetails) -> Result<(), String> {
        let failure_details = PipelineFailureDetails::builder()
            .r#type(FailureType::from(details.failure_type.as_str()))
            .message(details.message.clone())
            .build()
            .map_err(|error| format!("invalid failure details: {error}"))?;

        block_on_sdk(async {
            self.client
                .put_job_failure_result()
                .job_id(job_id)
                .failure_details(failure_details)
                .send()
                .await
                .map(|_| ())
                .map_err(|error| {
                    format!(
                        "failed to put job failure result: {}",
                        DisplayErrorContext(&error)
                    )
                })
        })
    }
}

pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }
}

impl NotificationPublisher for SnsPublisher {
    fn publish(&self, topic_arn: &str, subject: &str, message: &str) -> Result<(), String> {
        block_on_sdk(async {
            self.client
                .publish()
                .topic_arn(topic_arn)
                .subject(subject)
                .message(message)
                .send()
                .await
                .map(|_| ())
                .map_err(|error| {
                    format!(
                        "failed to publish to {topic_arn}: {}",
                        DisplayErrorContext(&error)
                    )
                })
        })
    }
}
