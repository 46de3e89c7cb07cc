pub mod common;
pub mod filter_translation;
pub mod job_execution;
