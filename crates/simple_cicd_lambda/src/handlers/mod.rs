pub mod build_notification;
pub mod semver;
