//! Cron execution log entries.

use serde::Serialize;
use sqlx::FromRow;
use cronlog_core::types::{DbId, Timestamp};

/// A row from the `cron_logs` table. Read-only: nothing in this service
/// writes log rows.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CronLog {
    pub id: DbId,
    pub cronjob_id: Option<DbId>,
    /// Hostname of the server that ran the job.
    pub server: String,
    pub output: String,
    pub created_at: Timestamp,
}
