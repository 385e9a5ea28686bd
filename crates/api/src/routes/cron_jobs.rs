//! Route definitions for the `/cron-jobs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cron_jobs;
use crate::state::AppState;

/// Routes mounted at `/cron-jobs`.
///
/// ```text
/// GET    /active          -> list_active_jobs
/// GET    /{id}            -> get_cron_job
/// POST   /{id}/enable     -> enable_cron_job
/// POST   /{id}/disable    -> disable_cron_job
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/active", get(cron_jobs::list_active_jobs))
        .route("/{id}", get(cron_jobs::get_cron_job))
        .route("/{id}/enable", post(cron_jobs::enable_cron_job))
        .route("/{id}/disable", post(cron_jobs::disable_cron_job))
}
