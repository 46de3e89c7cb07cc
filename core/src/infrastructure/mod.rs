pub mod db;
pub mod job_execution;
