use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use super::query_params::QueryParams;
use super::server::api_entities::api_error::ApiError;

/// Extractor for query parameters that supports filter, sort, and pagination
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     QueryParamsExtractor(query_params): QueryParamsExtractor,
/// ) -> Result<Response<Paginated<JobExecution>>, ApiError> {
///     // Use query_params.filter, query_params.sort, query_params.pagination
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub QueryParams);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        // Pairs keep repeated keys, a map would keep only the last one.
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query_string)
            .map_err(|e| {
                warn!("Rejected malformed query string: {}", e);
                ApiError::BadRequest(format!("Malformed query string: {}", e))
            })?;

        let query_params = QueryParams::from_pairs(&pairs).map_err(|e| {
            warn!("Rejected query parameters: {}", e);
            ApiError::BadRequest(e.to_string())
        })?;

        Ok(QueryParamsExtractor(query_params))
    }
}
