//! Handlers for the `/logs` resource.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use cronlog_db::models::cron_log::CronLog;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::ServerParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Logs of a single host, echoed back with the hostname that selected them.
#[derive(Debug, Serialize)]
pub struct ServerLogs {
    pub hostname: String,
    pub list: Vec<CronLog>,
}

/// GET /api/v1/logs
///
/// Every log entry in storage order.
pub async fn list_logs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let logs = state.store.list_all().await?;
    Ok(Json(DataResponse { data: logs }))
}

/// GET /api/v1/logs/server?server={hostname}
///
/// Log entries of one server. The hostname is matched verbatim; an unknown
/// host yields an empty list rather than 404.
pub async fn server_logs(
    State(state): State<AppState>,
    Query(params): Query<ServerParams>,
) -> AppResult<impl IntoResponse> {
    let list = state.store.list_for_server(&params.server).await?;

    tracing::debug!(server = %params.server, count = list.len(), "Listed server logs");

    Ok(Json(DataResponse {
        data: ServerLogs {
            hostname: params.server,
            list,
        },
    }))
}
