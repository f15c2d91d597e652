pub trait NotificationPublisher {
    fn publish(&self, topic_arn: &str, subject: &str, message: &str) -> Result<(), String>;
}
