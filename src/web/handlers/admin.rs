// GET /api/admin/stats — usage counts from the CSV logs.
//
// Reading the logs is file I/O, so it runs on the blocking pool.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::admin::AdminStats;
use crate::web::{api_error, AppState};

pub async fn get_stats(State(state): State<AppState>) -> Response {
    let sources = state.config.stats_sources();

    match tokio::task::spawn_blocking(move || AdminStats::load(&sources)).await {
        Ok(Ok(stats)) => Json(stats).into_response(),
        Ok(Err(e)) => {
            error!("Failed to load admin stats: {e:#}");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load statistics")
        }
        Err(e) => {
            error!("Admin stats task failed: {e}");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load statistics")
        }
    }
}
