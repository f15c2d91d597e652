use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use simple_cicd_core::config::NotificationConfig;
use simple_cicd_lambda::adapters::aws::{SnsPublisher, SsmParameterStore};
use simple_cicd_lambda::handlers::build_notification::BuildNotificationHandler;
use simple_cicd_lambda::logging::init_logging;

struct RuntimeDependencies {
    config: NotificationConfig,
    store: SsmParameterStore,
    publisher: SnsPublisher,
}

async fn handle_request(
    event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<String, Error> {
    let handler = BuildNotificationHandler::new(&deps.config, &deps.store, &deps.publisher)
        .map_err(|error| Error::from(format!("invalid PREFIX pattern: {error}")))?;
    handler
        .handle_event(event.payload)
        .map(str::to_string)
        .map_err(|error| {
            tracing::error!(
                component = "build_notification_handler",
                event = "notification_failed",
                error = %error
            );
            Error::from(error.to_string())
        })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = NotificationConfig::from_env().map_err(|error| Error::from(error.to_string()))?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let deps = RuntimeDependencies {
        config,
        store: SsmParameterStore::new(aws_sdk_ssm::Client::new(&aws_config)),
        publisher: SnsPublisher::new(aws_sdk_sns::Client::new(&aws_config)),
    };

    lambda_runtime::run(service_fn(|event| handle_request(event, &deps))).await
}
