//! Handler configuration, loaded once per process from environment-style
//! lookups and passed explicitly into handler constructors.

use crate::error::ConfigError;

pub const SSM_ROOT_VAR: &str = "SSM_ROOT";
pub const PREFIX_VAR: &str = "PREFIX";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemverConfig {
    /// Root path namespacing every Parameter Store key.
    pub ssm_root: String,
}

impl SemverConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            ssm_root: required(&lookup, SSM_ROOT_VAR)?,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub ssm_root: String,
    /// Naming prefix that precedes the repository name in build initiators.
    pub prefix: String,
}

impl NotificationConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            ssm_root: required(&lookup, SSM_ROOT_VAR)?,
            prefix: required(&lookup, PREFIX_VAR)?,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    let value = lookup(name).ok_or(ConfigError::Missing(name))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(value.to_string())
}
