use tracing::{debug, instrument};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        services::Service,
        value_objects::Paginated,
    },
    filter_translation::{self, QueryEntity},
    job_execution::{
        entities::JobExecution,
        ports::{JobExecutionRepository, JobExecutionService},
        value_objects::ListJobExecutionsInput,
    },
};

impl<JE> JobExecutionService for Service<JE>
where
    JE: JobExecutionRepository,
{
    #[instrument(skip(self, input), fields(filters = input.filters.len()))]
    async fn list_job_executions(
        &self,
        input: ListJobExecutionsInput,
    ) -> Result<Paginated<JobExecution>, CoreError> {
        let filters = filter_translation::resolve_filters(QueryEntity::JobExecution, input.filters);
        let page_request =
            filter_translation::resolve_sort(QueryEntity::JobExecution, input.page_request)
                .unwrap_or_default();

        page_request.validate()?;

        debug!(
            ?filters,
            sort = ?page_request.sort,
            page = page_request.page_number,
            size = page_request.page_size,
            "listing job executions"
        );

        self.job_execution_repository
            .find_job_executions(filters, page_request)
            .await
    }
}
