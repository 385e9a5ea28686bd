//! Repository for the `cronjobs` table.

use cronlog_core::job_key::JobKey;
use sqlx::PgPool;

use crate::models::cron_job::CronJob;

/// Column list for `cronjobs` queries.
const COLUMNS: &str = "id, path, server, active, created_at, updated_at";

/// Lookup and flag persistence for cron jobs.
pub struct CronJobRepo;

impl CronJobRepo {
    /// Find a job matching all three fields of `key`.
    pub async fn find_by_key(pool: &PgPool, key: &JobKey) -> Result<Option<CronJob>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cronjobs WHERE id = $1 AND path = $2 AND server = $3"
        );
        sqlx::query_as::<_, CronJob>(&query)
            .bind(key.id)
            .bind(&key.path)
            .bind(&key.server)
            .fetch_optional(pool)
            .await
    }

    /// Active jobs configured for `server`, ordered by ID.
    pub async fn list_active_for_server(
        pool: &PgPool,
        server: &str,
    ) -> Result<Vec<CronJob>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cronjobs WHERE server = $1 AND active = TRUE ORDER BY id ASC"
        );
        sqlx::query_as::<_, CronJob>(&query)
            .bind(server)
            .fetch_all(pool)
            .await
    }

    /// Write `job.active` back to its row and return the stored row.
    ///
    /// Returns `RowNotFound` if no row matches the job's composite key.
    pub async fn save(pool: &PgPool, job: &CronJob) -> Result<CronJob, sqlx::Error> {
        let query = format!(
            "UPDATE cronjobs SET active = $4, updated_at = NOW() \
             WHERE id = $1 AND path = $2 AND server = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CronJob>(&query)
            .bind(job.id)
            .bind(&job.path)
            .bind(&job.server)
            .bind(job.active)
            .fetch_optional(pool)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}
