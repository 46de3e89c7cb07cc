use crate::application::http::{
    health::__path_health, job_execution::router::JobExecutionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Operational Metadata API"
    ),
    paths(health),
    nest(
        (path = "/job-executions", api = JobExecutionApiDoc),
    )
)]
pub struct ApiDoc;
