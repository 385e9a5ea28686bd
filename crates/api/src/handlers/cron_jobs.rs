//! Handlers for the `/cron-jobs` resource.
//!
//! A job is addressed by its composite key: the ID in the URL path plus
//! `?path=&server=` query parameters. All three must match.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use cronlog_core::error::CoreError;
use cronlog_core::job_key::JobKey;
use cronlog_core::types::DbId;
use cronlog_db::models::cron_job::CronJob;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{JobKeyParams, ServerParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// JSON form of a job: the row plus its display string.
#[derive(Debug, Serialize)]
pub struct CronJobView {
    #[serde(flatten)]
    pub job: CronJob,
    pub display: String,
}

impl From<CronJob> for CronJobView {
    fn from(job: CronJob) -> Self {
        let display = job.to_string();
        Self { job, display }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a job by composite key, mapping a miss to `NotFound`.
async fn find_job(state: &AppState, key: &JobKey) -> AppResult<CronJob> {
    state
        .store
        .find_by_key(key)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("CronJob", key)))
}

/// Flip the job's flag with `toggle`, then persist it.
async fn set_active(
    state: &AppState,
    key: JobKey,
    toggle: fn(&mut CronJob) -> &mut CronJob,
) -> AppResult<CronJobView> {
    let mut job = find_job(state, &key).await?;
    let was_active = job.is_active();
    toggle(&mut job);

    let saved = state.store.save_job(&job).await?;

    tracing::info!(
        job_id = saved.id,
        path = %saved.path,
        server = %saved.server,
        was_active,
        active = saved.active,
        "Cron job activity updated",
    );

    Ok(saved.into())
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// GET /api/v1/cron-jobs/active?server={hostname}
///
/// Jobs of one server whose `active` flag is set.
pub async fn list_active_jobs(
    State(state): State<AppState>,
    Query(params): Query<ServerParams>,
) -> AppResult<impl IntoResponse> {
    let jobs: Vec<CronJobView> = state
        .store
        .list_active_for_server(&params.server)
        .await?
        .into_iter()
        .map(CronJobView::from)
        .collect();

    Ok(Json(DataResponse { data: jobs }))
}

/// GET /api/v1/cron-jobs/{id}?path=&server=
pub async fn get_cron_job(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<JobKeyParams>,
) -> AppResult<impl IntoResponse> {
    let job = find_job(&state, &params.into_key(id)).await?;
    Ok(Json(DataResponse {
        data: CronJobView::from(job),
    }))
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

/// POST /api/v1/cron-jobs/{id}/enable?path=&server=
///
/// Idempotent: enabling an active job succeeds and leaves it active.
pub async fn enable_cron_job(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<JobKeyParams>,
) -> AppResult<impl IntoResponse> {
    let job = set_active(&state, params.into_key(id), CronJob::enable).await?;
    Ok(Json(DataResponse { data: job }))
}

/// POST /api/v1/cron-jobs/{id}/disable?path=&server=
///
/// Idempotent: disabling an inactive job succeeds and leaves it inactive.
pub async fn disable_cron_job(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<JobKeyParams>,
) -> AppResult<impl IntoResponse> {
    let job = set_active(&state, params.into_key(id), CronJob::disable).await?;
    Ok(Json(DataResponse { data: job }))
}
