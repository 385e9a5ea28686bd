//! Cron job rows and their in-memory activity toggles.

use std::fmt;

use cronlog_core::job_key::JobKey;
use cronlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `cronjobs` table.
///
/// `enable` and `disable` only change the struct. Call
/// [`JobStore::save_job`](crate::store::JobStore::save_job) to write the
/// flag back.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CronJob {
    pub id: DbId,
    pub path: String,
    pub server: String,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CronJob {
    /// The composite key identifying this row.
    pub fn key(&self) -> JobKey {
        JobKey::new(self.id, self.path.clone(), self.server.clone())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the job active. Idempotent; returns `self` for chaining.
    pub fn enable(&mut self) -> &mut Self {
        self.active = true;
        self
    }

    /// Mark the job inactive. Idempotent; returns `self` for chaining.
    pub fn disable(&mut self) -> &mut Self {
        self.active = false;
        self
    }
}

/// Displays as the job's `path`.
impl fmt::Display for CronJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
