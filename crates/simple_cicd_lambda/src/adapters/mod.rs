pub mod aws;
pub mod job_status;
pub mod parameter_store;
pub mod publisher;
