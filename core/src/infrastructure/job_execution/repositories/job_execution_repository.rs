use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::error;

use crate::{
    domain::{
        common::{
            entities::app_errors::CoreError,
            value_objects::{FilterCondition, PageRequest, Paginated},
        },
        job_execution::{entities::JobExecution, ports::JobExecutionRepository},
    },
    infrastructure::job_execution::{
        mappers::map_job_execution,
        query::{TOTAL_COLUMN, count_job_executions, select_job_executions},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresJobExecutionRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresJobExecutionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl JobExecutionRepository for PostgresJobExecutionRepository {
    async fn find_job_executions(
        &self,
        filters: Vec<FilterCondition>,
        page_request: PageRequest,
    ) -> Result<Paginated<JobExecution>, CoreError> {
        // Both statements are built before any IO so bad paths never reach the database.
        let select = select_job_executions(&filters, &page_request)?;
        let count = count_job_executions(&filters)?;

        let backend = self.db.get_database_backend();

        let count_row = self
            .db
            .query_one(backend.build(&count))
            .await
            .map_err(|e| {
                error!("Failed to count job executions: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or_else(|| {
                error!("Count of job executions returned no row");
                CoreError::InternalServerError
            })?;
        let total = count_row
            .try_get::<i64>("", TOTAL_COLUMN)
            .map_err(|e| {
                error!("Failed to read job execution count: {}", e);
                CoreError::InternalServerError
            })?;

        let items = self
            .db
            .query_all(backend.build(&select))
            .await
            .map_err(|e| {
                error!("Failed to fetch job executions: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(map_job_execution)
            .collect::<Result<Vec<JobExecution>, _>>()
            .map_err(|e| {
                error!("Failed to map job execution row: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Paginated {
            items,
            page_number: page_request.page_number,
            page_size: page_request.page_size,
            total: total.max(0) as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{NaiveDate, TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    use super::*;
    use crate::domain::common::value_objects::{Sort, SortOrder};
    use crate::domain::job_execution::entities::BatchStatus;

    fn disconnected() -> PostgresJobExecutionRepository {
        PostgresJobExecutionRepository::new(Arc::new(DatabaseConnection::Disconnected))
    }

    fn mocked(results: Vec<Vec<BTreeMap<&'static str, Value>>>) -> PostgresJobExecutionRepository {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(results)
            .into_connection();
        PostgresJobExecutionRepository::new(Arc::new(db))
    }

    fn total_row(total: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([(TOTAL_COLUMN, total.into())])
    }

    fn execution_row(id: i64, status: Option<&str>) -> BTreeMap<&'static str, Value> {
        let started = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(8, 30, 0))
            .unwrap();

        BTreeMap::from([
            ("job_execution_id", id.into()),
            ("job_instance_id", 3i64.into()),
            ("job_name", "ingest.orders".into()),
            ("feed_id", Option::<uuid::Uuid>::None.into()),
            ("feed_name", Some("orders".to_string()).into()),
            ("status", status.map(str::to_string).into()),
            ("exit_code", Option::<String>::None.into()),
            ("exit_message", Option::<String>::None.into()),
            ("start_time", Some(started).into()),
            ("end_time", Option::<chrono::NaiveDateTime>::None.into()),
        ])
    }

    #[tokio::test]
    async fn test_rows_are_mapped_with_total() {
        let repository = mocked(vec![
            vec![total_row(42)],
            vec![
                execution_row(12, Some("COMPLETED")),
                execution_row(11, Some("PAUSED_FOREVER")),
            ],
        ]);

        let page = repository
            .find_job_executions(vec![], PageRequest::of(1, 2))
            .await
            .unwrap();

        assert_eq!(page.total, 42);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 2);
        assert_eq!(page.items.len(), 2);

        let first = &page.items[0];
        assert_eq!(first.job_execution_id, 12);
        assert_eq!(first.job_name, "ingest.orders");
        assert_eq!(first.feed_name.as_deref(), Some("orders"));
        assert_eq!(first.status, BatchStatus::Completed);
        assert_eq!(first.exit_code, "");
        assert_eq!(
            first.start_time,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap())
        );
        assert_eq!(first.end_time, None);

        assert_eq!(page.items[1].status, BatchStatus::Unknown);
    }

    #[tokio::test]
    async fn test_null_status_maps_to_unknown() {
        let repository = mocked(vec![vec![total_row(1)], vec![execution_row(5, None)]]);

        let page = repository
            .find_job_executions(vec![], PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.items[0].status, BatchStatus::Unknown);
    }

    #[tokio::test]
    async fn test_unreadable_count_is_an_error() {
        let repository = mocked(vec![
            vec![BTreeMap::from([(TOTAL_COLUMN, "many".into())])],
            vec![execution_row(1, Some("COMPLETED"))],
        ]);

        let result = repository
            .find_job_executions(vec![], PageRequest::default())
            .await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_missing_count_row_is_an_error() {
        let repository = mocked(vec![vec![], vec![execution_row(1, Some("COMPLETED"))]]);

        let result = repository
            .find_job_executions(vec![], PageRequest::default())
            .await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_unsupported_sort_is_rejected_before_touching_database() {
        let result = disconnected()
            .find_job_executions(
                vec![],
                PageRequest::new(0, 20, Sort::new(vec![SortOrder::asc("bogus")])),
            )
            .await;

        assert_eq!(
            result,
            Err(CoreError::UnsupportedProperty("bogus".to_string()))
        );
    }

    #[tokio::test]
    async fn test_invalid_filter_value_is_rejected_before_touching_database() {
        let result = disconnected()
            .find_job_executions(
                vec![FilterCondition::equals("jobExecutionId", "twelve")],
                PageRequest::default(),
            )
            .await;

        assert!(matches!(result, Err(CoreError::InvalidFilterValue { .. })));
    }
}
