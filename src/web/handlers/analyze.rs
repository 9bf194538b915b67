// POST /api/analyze — score a CV against a job description.
//
// Body: { "cv_text": "...", "job_text": "...", "email": "optional" }
// Returns the ComparisonResult as JSON. Neither text is stored. When an email
// is given it is appended to the lead log on a detached blocking task, so a
// slow or failing disk never delays or fails the response.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::{error, warn};

use crate::leads::LeadOutcome;
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    cv_text: String,
    job_text: String,
    #[serde(default)]
    email: Option<String>,
}

pub async fn analyze(State(state): State<AppState>, Json(body): Json<AnalyzeRequest>) -> Response {
    if body.cv_text.trim().is_empty() || body.job_text.trim().is_empty() {
        return api_error(
            StatusCode::BAD_REQUEST,
            "Please paste both your CV and the job description.",
        );
    }

    let AnalyzeRequest {
        cv_text,
        job_text,
        email,
    } = body;

    // Tagging is CPU-bound; keep it off the async workers.
    let comparator = state.comparator.clone();
    let result =
        match tokio::task::spawn_blocking(move || comparator.compare(&cv_text, &job_text)).await {
            Ok(result) => result,
            Err(e) => {
                error!("Comparison task failed: {e}");
                return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Comparison failed");
            }
        };

    if let Some(email) = email.filter(|e| !e.trim().is_empty()) {
        let leads = state.leads.clone();
        tokio::task::spawn_blocking(move || match leads.record(&email) {
            Ok(LeadOutcome::Recorded(_)) => {}
            Ok(LeadOutcome::Skipped) => warn!("Ignoring invalid lead email"),
            Err(e) => warn!("Failed to record lead: {e:#}"),
        });
    }

    Json(result).into_response()
}
