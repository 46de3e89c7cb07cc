use crate::{
    domain::common::{OpsMetaConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        job_execution::PostgresJobExecutionRepository,
    },
};

pub type OpsMetaService = Service<PostgresJobExecutionRepository>;

pub async fn create_service(config: OpsMetaConfig) -> Result<OpsMetaService, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let job_execution_repository = PostgresJobExecutionRepository::new(postgres.get_db());

    Ok(Service::new(job_execution_repository))
}
