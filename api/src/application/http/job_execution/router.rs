use super::handlers::list_job_executions::{__path_list_job_executions, list_job_executions};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_job_executions))]
pub struct JobExecutionApiDoc;

pub fn job_execution_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/job-executions", state.args.server.root_path),
        get(list_job_executions),
    )
}
