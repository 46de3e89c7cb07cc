pub mod job_execution_repository;

pub use job_execution_repository::PostgresJobExecutionRepository;
