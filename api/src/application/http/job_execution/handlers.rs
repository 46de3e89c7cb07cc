pub mod list_job_executions;
