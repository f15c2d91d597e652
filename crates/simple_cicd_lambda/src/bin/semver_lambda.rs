use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use simple_cicd_core::config::SemverConfig;
use simple_cicd_lambda::adapters::aws::{CodePipelineJobStatus, SsmParameterStore};
use simple_cicd_lambda::handlers::semver::SemverHandler;
use simple_cicd_lambda::logging::init_logging;

struct RuntimeDependencies {
    config: SemverConfig,
    store: SsmParameterStore,
    job_status: CodePipelineJobStatus,
}

async fn handle_request(
    event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<String, Error> {
    let handler = SemverHandler::new(&deps.config, &deps.store, &deps.job_status);
    handler
        .handle_event(&event.payload)
        .map(str::to_string)
        .map_err(|error| Error::from(error.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = SemverConfig::from_env().map_err(|error| Error::from(error.to_string()))?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let deps = RuntimeDependencies {
        config,
        store: SsmParameterStore::new(aws_sdk_ssm::Client::new(&aws_config)),
        job_status: CodePipelineJobStatus::new(aws_sdk_codepipeline::Client::new(&aws_config)),
    };

    lambda_runtime::run(service_fn(|event| handle_request(event, &deps))).await
}
