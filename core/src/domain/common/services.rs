use crate::domain::job_execution::ports::JobExecutionRepository;

#[derive(Clone)]
pub struct Service<JE>
where
    JE: JobExecutionRepository,
{
    pub(crate) job_execution_repository: JE,
}

impl<JE> Service<JE>
where
    JE: JobExecutionRepository,
{
    pub fn new(job_execution_repository: JE) -> Self {
        Self {
            job_execution_repository,
        }
    }
}
