use chrono::NaiveDateTime;
use sea_orm::{DbErr, QueryResult};
use uuid::Uuid;

use crate::domain::job_execution::entities::{BatchStatus, JobExecution};

pub fn map_job_execution(row: &QueryResult) -> Result<JobExecution, DbErr> {
    let status: Option<String> = row.try_get("", "status")?;
    let exit_code: Option<String> = row.try_get("", "exit_code")?;
    let start_time: Option<NaiveDateTime> = row.try_get("", "start_time")?;
    let end_time: Option<NaiveDateTime> = row.try_get("", "end_time")?;

    Ok(JobExecution {
        job_execution_id: row.try_get("", "job_execution_id")?,
        job_instance_id: row.try_get("", "job_instance_id")?,
        job_name: row.try_get("", "job_name")?,
        feed_id: row.try_get::<Option<Uuid>>("", "feed_id")?,
        feed_name: row.try_get("", "feed_name")?,
        status: status
            .as_deref()
            .map(BatchStatus::from)
            .unwrap_or(BatchStatus::Unknown),
        exit_code: exit_code.unwrap_or_default(),
        exit_message: row.try_get("", "exit_message")?,
        start_time: start_time.map(|dt| dt.and_utc()),
        end_time: end_time.map(|dt| dt.and_utc()),
    })
}
