//! Shared simple-cicd domain primitives.
//!
//! This crate owns the job contract, user-parameter decoding, Parameter Store
//! key naming and the patch-bump operation. It intentionally excludes AWS SDK
//! and Lambda runtime concerns.

pub mod config;
pub mod contract;
pub mod error;
pub mod parameter_keys;
pub mod parameters;
pub mod version;
