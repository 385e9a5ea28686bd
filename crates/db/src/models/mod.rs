//! Row structs for the `cronjobs` and `cron_logs` tables.
//!
//! Each struct derives `FromRow` for repository queries and `Serialize` so
//! handlers can return it directly.

pub mod cron_job;
pub mod cron_log;
