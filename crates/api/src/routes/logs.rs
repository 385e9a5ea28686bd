//! Route definitions for the `/logs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::logs;
use crate::state::AppState;

/// Routes mounted at `/logs`.
///
/// ```text
/// GET    /                -> list_logs
/// GET    /server          -> server_logs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(logs::list_logs))
        .route("/server", get(logs::server_logs))
}
