//! Store traits the HTTP layer depends on, and their Postgres implementation.
//!
//! Handlers only see `Arc<dyn CronStore>`, so tests can swap in the
//! in-memory store from [`crate::memory`].

use async_trait::async_trait;
use cronlog_core::job_key::JobKey;

use crate::models::cron_job::CronJob;
use crate::models::cron_log::CronLog;
use crate::repositories::{CronJobRepo, CronLogRepo};
use crate::DbPool;

/// Read access to cron execution logs.
#[async_trait]
pub trait LogReader: Send + Sync {
    /// Every log entry in storage order.
    async fn list_all(&self) -> Result<Vec<CronLog>, sqlx::Error>;

    /// Entries whose `server` equals `hostname`; empty when none match.
    async fn list_for_server(&self, hostname: &str) -> Result<Vec<CronLog>, sqlx::Error>;
}

/// Lookup and persistence of cron jobs.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn find_by_key(&self, key: &JobKey) -> Result<Option<CronJob>, sqlx::Error>;

    /// Jobs with `server == server` and `active == true`.
    async fn list_active_for_server(&self, server: &str) -> Result<Vec<CronJob>, sqlx::Error>;

    /// Persist the job's `active` flag. `RowNotFound` if the row is gone.
    async fn save_job(&self, job: &CronJob) -> Result<CronJob, sqlx::Error>;
}

/// Everything a request handler needs from persistence.
#[async_trait]
pub trait CronStore: LogReader + JobStore {
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// [`CronStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogReader for PgStore {
    async fn list_all(&self) -> Result<Vec<CronLog>, sqlx::Error> {
        CronLogRepo::list_all(&self.pool).await
    }

    async fn list_for_server(&self, hostname: &str) -> Result<Vec<CronLog>, sqlx::Error> {
        CronLogRepo::list_for_server(&self.pool, hostname).await
    }
}

#[async_trait]
impl JobStore for PgStore {
    async fn find_by_key(&self, key: &JobKey) -> Result<Option<CronJob>, sqlx::Error> {
        CronJobRepo::find_by_key(&self.pool, key).await
    }

    async fn list_active_for_server(&self, server: &str) -> Result<Vec<CronJob>, sqlx::Error> {
        CronJobRepo::list_active_for_server(&self.pool, server).await
    }

    async fn save_job(&self, job: &CronJob) -> Result<CronJob, sqlx::Error> {
        CronJobRepo::save(&self.pool, job).await
    }
}

#[async_trait]
impl CronStore for PgStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
