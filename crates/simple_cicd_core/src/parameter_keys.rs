pub const VERSION_NAMESPACE: &str = "simple-cicd";
pub const TOPIC_NAMESPACE: &str = "sns-topic";

fn trimmed_root(root: &str) -> &str {
    root.trim_end_matches('/')
}

/// Parameter Store key holding the current version of `repo` on `branch`.
pub fn version_parameter_key(root: &str, repo: &str, branch: &str) -> String {
    format!(
        "{}/{VERSION_NAMESPACE}/{repo}/{branch}/version",
        trimmed_root(root)
    )
}

/// Parameter Store key holding the notification topic ARN for `repo`.
pub fn topic_parameter_key(root: &str, repo: &str) -> String {
    format!("{}/{TOPIC_NAMESPACE}/{repo}-arn", trimmed_root(root))
}
