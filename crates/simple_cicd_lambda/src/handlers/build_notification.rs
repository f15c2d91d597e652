use regex::Regex;
use serde_json::Value;
use simple_cicd_core::config::NotificationConfig;
use simple_cicd_core::contract::{BuildNotification, BuildStateEvent, NOTIFICATION_SENT_STATUS};
use simple_cicd_core::error::ParameterStoreError;
use simple_cicd_core::parameter_keys::topic_parameter_key;
use thiserror::Error;

use crate::adapters::parameter_store::ParameterStore;
use crate::adapters::publisher::NotificationPublisher;

const COMPONENT: &str = "build_notification_handler";

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("invalid build state event: {0}")]
    InvalidEvent(String),

    #[error("build initiator '{0}' does not name a known repository")]
    UnknownInitiator(String),

    #[error("topic lookup failed: {0}")]
    Parameter(#[from] ParameterStoreError),

    #[error("{0}")]
    Publish(String),
}

/// Forwards CodeBuild state changes to the per-repository SNS topic.
///
/// Stateless: every event resolves its topic with a fresh Parameter Store
/// lookup.
pub struct BuildNotificationHandler<'a, S: ?Sized, P: ?Sized> {
    root: &'a str,
    initiator_pattern: Regex,
    store: &'a S,
    publisher: &'a P,
}

impl<'a, S, P> BuildNotificationHandler<'a, S, P>
where
    S: ParameterStore + ?Sized,
    P: NotificationPublisher + ?Sized,
{
    pub fn new(
        config: &'a NotificationConfig,
        store: &'a S,
        publisher: &'a P,
    ) -> Result<Self, regex::Error> {
        let initiator_pattern = Regex::new(&format!(r".*/{}-(.*)", regex::escape(&config.prefix)))?;
        Ok(Self {
            root: &config.ssm_root,
            initiator_pattern,
            store,
            publisher,
        })
    }

    pub fn handle_event(&self, event: Value) -> Result<&'static str, NotificationError> {
        let event: BuildStateEvent = serde_json::from_value(event)
            .map_err(|error| NotificationError::InvalidEvent(error.to_string()))?;
        let detail = &event.detail;

        let repo = self.repository_name(&detail.additional_information.initiator)?;
        let topic_key = topic_parameter_key(self.root, repo);
        let topic_arn = self.store.get_parameter(&topic_key)?;

        let notification = BuildNotification::from_detail(detail);
        self.publisher
            .publish(&topic_arn, &notification.subject, &notification.message)
            .map_err(NotificationError::Publish)?;

        tracing::info!(
            component = COMPONENT,
            event = "notification_sent",
            repo,
            project = %detail.project_name,
            build_status = %detail.build_status,
            build_id = %detail.build_id
        );
        Ok(NOTIFICATION_SENT_STATUS)
    }

    fn repository_name<'e>(&self, initiator: &'e str) -> Result<&'e str, NotificationError> {
        self.initiator_pattern
            .captures(initiator)
            .and_then(|captures| captures.get(1))
            .map(|capture| capture.as_str())
            .filter(|repo| !repo.is_empty())
            .ok_or_else(|| NotificationError::UnknownInitiator(initiator.to_string()))
    }
}
