// crates/jobsearch/src/jobs/repo.rs

use async_trait::async_trait;
use sqlx::AnyPool;
use tracing::{debug, instrument};

use crate::jobs::model::JobInstance;
use crate::jobs::page::{take_page, PageWindow};
use crate::jobs::query::{build_search_query, COUNT_BY_JOB_NAME};
use crate::jobs::store::{map_job_instance, JobInstanceStore};
use crate::JobSearchError;

/// Search capability over job instances, independent of the backing store.
#[async_trait]
pub trait SearchableJobInstances: Send + Sync {
    async fn count_job_instances(&self, name: &str) -> Result<i64, JobSearchError>;

    async fn get_job_instances(
        &self,
        job_name: Option<&str>,
        job_state: Option<&str>,
        start: i64,
        count: i64,
    ) -> Result<Vec<JobInstance>, JobSearchError>;
}

/// Adds count + paginated search on top of the base store.
#[derive(Clone)]
pub struct JobInstanceRepo {
    store: JobInstanceStore,
}

impl JobInstanceRepo {
    pub fn new(store: JobInstanceStore) -> Self {
        Self { store }
    }

    pub fn from_pool(
        pool: AnyPool,
        table_prefix: impl Into<String>,
    ) -> Result<Self, JobSearchError> {
        Ok(Self::new(JobInstanceStore::new(pool, table_prefix)?))
    }

    pub fn store(&self) -> &JobInstanceStore {
        &self.store
    }

    /// Instances whose name equals `name`, whether or not they have run.
    #[instrument(skip(self))]
    pub async fn count_job_instances(&self, name: &str) -> Result<i64, JobSearchError> {
        let sql = self.store.queries().prepare(COUNT_BY_JOB_NAME);
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(name)
            .fetch_one(self.store.pool())
            .await?;
        Ok(count)
    }

    /// Page of instances that have at least one execution, newest id first.
    ///
    /// - `job_name` / `job_state` are optional; blank values are ignored
    /// - `start` rows are skipped on the cursor without being decoded
    /// - fewer than `count` rows is a short page, not an error
    /// - negative `start` or `count` is rejected with `InvalidPagination`
    #[instrument(skip(self))]
    pub async fn get_job_instances(
        &self,
        job_name: Option<&str>,
        job_state: Option<&str>,
        start: i64,
        count: i64,
    ) -> Result<Vec<JobInstance>, JobSearchError> {
        let window = PageWindow::new(start, count)?;

        let search = build_search_query(job_name, job_state);
        let sql = self.store.queries().prepare(&search.template);
        debug!(%sql, binds = search.params.len(), "searching job instances");

        let mut query = sqlx::query(&sql);
        for param in &search.params {
            query = query.bind(param.as_str());
        }

        let rows = query.fetch(self.store.pool());
        let page = take_page(rows, window, |row| map_job_instance(&row)).await?;

        debug!(returned = page.len(), "job instance page");
        Ok(page)
    }
}

#[async_trait]
impl SearchableJobInstances for JobInstanceRepo {
    async fn count_job_instances(&self, name: &str) -> Result<i64, JobSearchError> {
        JobInstanceRepo::count_job_instances(self, name).await
    }

    async fn get_job_instances(
        &self,
        job_name: Option<&str>,
        job_state: Option<&str>,
        start: i64,
        count: i64,
    ) -> Result<Vec<JobInstance>, JobSearchError> {
        JobInstanceRepo::get_job_instances(self, job_name, job_state, start, count).await
    }
}
