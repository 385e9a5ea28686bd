//! Repository for the `cron_logs` table.

use sqlx::PgPool;

use crate::models::cron_log::CronLog;

/// Column list for `cron_logs` queries.
const COLUMNS: &str = "id, cronjob_id, server, output, created_at";

/// Read-only access to cron execution logs.
pub struct CronLogRepo;

impl CronLogRepo {
    /// Every log entry in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<CronLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cron_logs ORDER BY id ASC");
        sqlx::query_as::<_, CronLog>(&query).fetch_all(pool).await
    }

    /// Log entries whose `server` equals `hostname` exactly.
    pub async fn list_for_server(
        pool: &PgPool,
        hostname: &str,
    ) -> Result<Vec<CronLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cron_logs WHERE server = $1 ORDER BY id ASC");
        sqlx::query_as::<_, CronLog>(&query)
            .bind(hostname)
            .fetch_all(pool)
            .await
    }
}
