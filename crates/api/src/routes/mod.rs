pub mod cron_jobs;
pub mod health;
pub mod logs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /logs                                   all log entries (GET)
/// /logs/server?server=                    log entries of one host (GET)
///
/// /cron-jobs/active?server=               active jobs of one host (GET)
/// /cron-jobs/{id}?path=&server=           job by composite key (GET)
/// /cron-jobs/{id}/enable?path=&server=    set active flag (POST)
/// /cron-jobs/{id}/disable?path=&server=   clear active flag (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/logs", logs::router())
        .nest("/cron-jobs", cron_jobs::router())
}
