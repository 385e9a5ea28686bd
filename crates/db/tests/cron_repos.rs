//! Integration tests for the cron job and cron log repositories.
//!
//! Exercises the SQL against a real database. Run with a reachable
//! `DATABASE_URL` and `cargo test -- --ignored`.

use cronlog_core::job_key::JobKey;
use cronlog_core::types::DbId;
use cronlog_db::repositories::{CronJobRepo, CronLogRepo};
use cronlog_db::store::{JobStore, LogReader, PgStore};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_job(pool: &PgPool, path: &str, server: &str, active: bool) -> DbId {
    sqlx::query_scalar::<_, DbId>("INSERT INTO cronjobs (path, server, active) VALUES ($1, $2, $3) RETURNING id")
        .bind(path)
        .bind(server)
        .bind(active)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn insert_log(pool: &PgPool, server: &str, output: &str) -> DbId {
    sqlx::query_scalar::<_, DbId>("INSERT INTO cron_logs (server, output) VALUES ($1, $2) RETURNING id")
        .bind(server)
        .bind(output)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Logs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn list_all_returns_every_log_in_insertion_order(pool: PgPool) {
    let first = insert_log(&pool, "web01", "one").await;
    let second = insert_log(&pool, "db01", "two").await;

    let logs = CronLogRepo::list_all(&pool).await.unwrap();
    let ids: Vec<DbId> = logs.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn list_for_server_filters_exactly(pool: PgPool) {
    insert_log(&pool, "web01", "one").await;
    insert_log(&pool, "db01", "two").await;

    let logs = CronLogRepo::list_for_server(&pool, "web01").await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].output, "one");

    let none = CronLogRepo::list_for_server(&pool, "mail01").await.unwrap();
    assert!(none.is_empty());
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn find_by_key_matches_all_fields(pool: PgPool) {
    let id = insert_job(&pool, "/usr/bin/backup.sh", "web01", true).await;

    let key = JobKey::new(id, "/usr/bin/backup.sh", "web01");
    let job = CronJobRepo::find_by_key(&pool, &key).await.unwrap().unwrap();
    assert_eq!(job.to_string(), "/usr/bin/backup.sh");

    let absent = JobKey::new(id, "/usr/bin/backup.sh", "web02");
    assert!(CronJobRepo::find_by_key(&pool, &absent).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn list_active_for_server_excludes_inactive_and_other_servers(pool: PgPool) {
    let wanted = insert_job(&pool, "/bin/a", "s", true).await;
    insert_job(&pool, "/bin/b", "s", false).await;
    insert_job(&pool, "/bin/c", "other", true).await;

    let jobs = CronJobRepo::list_active_for_server(&pool, "s").await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, wanted);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn save_through_store_persists_active_flag(pool: PgPool) {
    let id = insert_job(&pool, "/bin/a", "s", true).await;
    let store = PgStore::new(pool);
    let key = JobKey::new(id, "/bin/a", "s");

    let mut job = store.find_by_key(&key).await.unwrap().unwrap();
    job.disable();
    let saved = store.save_job(&job).await.unwrap();
    assert!(!saved.is_active());

    let reloaded = store.find_by_key(&key).await.unwrap().unwrap();
    assert!(!reloaded.is_active());
    assert!(store.list_active_for_server("s").await.unwrap().is_empty());
    assert!(store.list_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn save_unknown_job_returns_row_not_found(pool: PgPool) {
    let id = insert_job(&pool, "/bin/a", "s", true).await;
    let mut job = CronJobRepo::find_by_key(&pool, &JobKey::new(id, "/bin/a", "s"))
        .await
        .unwrap()
        .unwrap();
    job.path = "/bin/moved".to_string();

    let err = CronJobRepo::save(&pool, &job).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::RowNotFound));
}
