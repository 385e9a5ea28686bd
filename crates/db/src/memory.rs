//! In-memory [`CronStore`] for tests.
//!
//! Mirrors the SQL semantics of the Postgres repositories: insertion order,
//! exact string equality on `server` and `path`.

use async_trait::async_trait;
use chrono::Utc;
use cronlog_core::job_key::JobKey;
use cronlog_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::cron_job::CronJob;
use crate::models::cron_log::CronLog;
use crate::store::{CronStore, JobStore, LogReader};

#[derive(Default)]
pub struct MemoryStore {
    logs: RwLock<Vec<CronLog>>,
    jobs: RwLock<Vec<CronJob>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a log entry, assigning the next ID.
    pub async fn insert_log(
        &self,
        cronjob_id: Option<DbId>,
        server: &str,
        output: &str,
    ) -> CronLog {
        let mut logs = self.logs.write().await;
        let log = CronLog {
            id: logs.len() as DbId + 1,
            cronjob_id,
            server: server.to_string(),
            output: output.to_string(),
            created_at: Utc::now(),
        };
        logs.push(log.clone());
        log
    }

    /// Append a job, assigning the next ID.
    pub async fn insert_job(&self, path: &str, server: &str, active: bool) -> CronJob {
        let mut jobs = self.jobs.write().await;
        let now = Utc::now();
        let job = CronJob {
            id: jobs.len() as DbId + 1,
            path: path.to_string(),
            server: server.to_string(),
            active,
            created_at: now,
            updated_at: now,
        };
        jobs.push(job.clone());
        job
    }
}

#[async_trait]
impl LogReader for MemoryStore {
    async fn list_all(&self) -> Result<Vec<CronLog>, sqlx::Error> {
        Ok(self.logs.read().await.clone())
    }

    async fn list_for_server(&self, hostname: &str) -> Result<Vec<CronLog>, sqlx::Error> {
        Ok(self
            .logs
            .read()
            .await
            .iter()
            .filter(|l| l.server == hostname)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn find_by_key(&self, key: &JobKey) -> Result<Option<CronJob>, sqlx::Error> {
        Ok(self
            .jobs
            .read()
            .await
            .iter()
            .find(|j| j.id == key.id && j.path == key.path && j.server == key.server)
            .cloned())
    }

    async fn list_active_for_server(&self, server: &str) -> Result<Vec<CronJob>, sqlx::Error> {
        Ok(self
            .jobs
            .read()
            .await
            .iter()
            .filter(|j| j.server == server && j.active)
            .cloned()
            .collect())
    }

    async fn save_job(&self, job: &CronJob) -> Result<CronJob, sqlx::Error> {
        let mut jobs = self.jobs.write().await;
        let stored = jobs
            .iter_mut()
            .find(|j| j.id == job.id && j.path == job.path && j.server == job.server)
            .ok_or(sqlx::Error::RowNotFound)?;
        stored.active = job.active;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }
}

#[async_trait]
impl CronStore for MemoryStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
