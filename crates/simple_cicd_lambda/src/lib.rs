//! AWS-oriented adapters and handlers for the simple-cicd pipeline.
//!
//! This crate owns runtime integration details (Lambda handlers, Parameter
//! Store, CodePipeline and SNS adapters) and builds on the domain primitives in
//! `simple_cicd_core`.

pub mod adapters;
pub mod handlers;
pub mod logging;
pub mod reporter;
pub mod repository;
