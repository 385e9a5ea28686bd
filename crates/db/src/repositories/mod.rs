//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod cron_job_repo;
pub mod cron_log_repo;

pub use cron_job_repo::CronJobRepo;
pub use cron_log_repo::CronLogRepo;
