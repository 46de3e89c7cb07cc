use std::future::Future;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        value_objects::{FilterCondition, PageRequest, Paginated},
    },
    job_execution::{entities::JobExecution, value_objects::ListJobExecutionsInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait JobExecutionService: Send + Sync {
    /// List job executions. Filter and sort properties may use aliases.
    fn list_job_executions(
        &self,
        input: ListJobExecutionsInput,
    ) -> impl Future<Output = Result<Paginated<JobExecution>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait JobExecutionRepository: Send + Sync {
    /// Filters and sort orders reference canonical property paths.
    fn find_job_executions(
        &self,
        filters: Vec<FilterCondition>,
        page_request: PageRequest,
    ) -> impl Future<Output = Result<Paginated<JobExecution>, CoreError>> + Send;
}
