// Web server — Axum-based JSON API in front of the keyword comparator.
//
// A front end posts the CV and job text to /api/analyze and renders the
// returned score and missing keywords. Admin statistics sit behind a
// shared-secret bearer check.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::keywords::KeywordComparator;
use crate::leads::LeadLog;

pub mod auth;
pub mod handlers;

/// Shared application state threaded through all Axum handlers.
///
/// The comparator is built once at startup; cloning the state only bumps
/// reference counts.
#[derive(Clone)]
pub struct AppState {
    pub comparator: KeywordComparator,
    pub config: Arc<Config>,
    pub leads: LeadLog,
}

impl AppState {
    pub fn new(config: Config, comparator: KeywordComparator) -> Self {
        let leads = LeadLog::new(config.leads_path.clone());
        Self {
            comparator,
            config: Arc::new(config),
            leads,
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(state: AppState, port: u16, bind: &str) -> Result<()> {
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("cvmatch API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    // Admin routes (require the shared admin password)
    let admin_api = Router::new()
        .route("/api/admin/stats", get(handlers::admin::get_stats))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ));

    // Public routes (no auth)
    let public_api = Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(handlers::analyze::analyze));

    Router::new()
        .merge(admin_api)
        .merge(public_api)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
