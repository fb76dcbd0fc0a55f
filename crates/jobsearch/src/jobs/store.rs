// crates/jobsearch/src/jobs/store.rs
//
// Base job-instance persistence. Rows are created by the upstream batch
// framework, so only the read half of the contract is backed by SQL.

use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};
use tracing::warn;

use crate::jobs::model::JobInstance;
use crate::jobs::query::{QueryTemplates, GET_BY_ID, GET_JOB_NAMES};
use crate::JobSearchError;

#[derive(Clone)]
pub struct JobInstanceStore {
    pool: AnyPool,
    queries: QueryTemplates,
}

impl JobInstanceStore {
    /// Fails with `InvalidTablePrefix` unless the prefix is a plain identifier.
    pub fn new(pool: AnyPool, table_prefix: impl Into<String>) -> Result<Self, JobSearchError> {
        Ok(Self {
            pool,
            queries: QueryTemplates::new(table_prefix)?,
        })
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn queries(&self) -> &QueryTemplates {
        &self.queries
    }

    pub async fn get_job_instance(&self, id: i64) -> Result<Option<JobInstance>, JobSearchError> {
        let sql = self.queries.prepare(GET_BY_ID);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let instance = row.as_ref().map(map_job_instance).transpose()?;
        Ok(instance)
    }

    /// Distinct job names, ascending.
    pub async fn get_job_names(&self) -> Result<Vec<String>, JobSearchError> {
        let sql = self.queries.prepare(GET_JOB_NAMES);
        let names: Vec<String> = sqlx::query_scalar(&sql).fetch_all(&self.pool).await?;
        Ok(names)
    }

    /// Always fails: instances are only ever inserted by the batch framework.
    pub async fn create_job_instance(&self, job_name: &str) -> Result<JobInstance, JobSearchError> {
        warn!(job_name, "rejected create on read-only job instance store");
        Err(JobSearchError::UnsupportedOperation("create_job_instance"))
    }

    /// Key generation hook of the write path. Never hands out a sentinel id.
    pub fn next_instance_id(&self) -> Result<i64, JobSearchError> {
        Err(JobSearchError::UnsupportedOperation("next_instance_id"))
    }
}

/// Column 0 is the instance id, column 1 the job name.
pub fn map_job_instance(row: &AnyRow) -> Result<JobInstance, sqlx::Error> {
    let id: i64 = row.try_get(0)?;
    let name: String = row.try_get(1)?;

    let mut instance = JobInstance::new(id, name);
    instance.increment_version();
    Ok(instance)
}
