use axum::extract::State;
use opsmeta_core::domain::{
    common::value_objects::Paginated,
    job_execution::{
        entities::JobExecution, ports::JobExecutionService,
        value_objects::ListJobExecutionsInput,
    },
};

use crate::application::http::{
    query_builder::{filter_conditions, page_request},
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "job-execution",
    summary = "List job executions",
    description = "Lists batch job executions with filtering, sorting and pagination. \
        Filter and sort fields accept the short names feed, feedName, feedname, jobName, job, \
        executionId and executionid besides the full property paths.",
    params(
        ("filter[field]" = Option<String>, Query, description = "Equality filter, e.g. filter[feed]=orders"),
        ("filter[field][op]" = Option<String>, Query, description = "Filter with operator eq, ne, gt, gte, lt, lte, in, like or ilike"),
        ("sort" = Option<String>, Query, description = "Comma separated fields, prefix with - for descending"),
        ("page" = Option<u64>, Query, description = "Zero-based page number (default: 0)"),
        ("size" = Option<u64>, Query, description = "Page size (default: 20, max: 100)"),
    ),
    responses(
        (status = 200, body = Paginated<JobExecution>),
        (status = 400, description = "Unsupported property, operator or value"),
    )
)]
pub async fn list_job_executions(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<Paginated<JobExecution>>, ApiError> {
    let input = ListJobExecutionsInput {
        filters: filter_conditions(&query_params.filter),
        page_request: Some(page_request(&query_params)),
    };

    let page = state.service.list_job_executions(input).await.map_err(|e| {
        tracing::error!("Failed to list job executions: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(page))
}
