// Admin auth middleware — shared-secret bearer check.
//
// Admin requests carry `Authorization: Bearer <CVMATCH_ADMIN_PASSWORD>`.
// There are no sessions: every request is checked on its own, so the server
// keeps no "logged in" state between calls.
//
//   password not configured -> 503
//   header missing or wrong -> 401
//   match                   -> pass through

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use super::{api_error, AppState};
use crate::admin::verify_password;

/// Axum middleware: reject requests without the admin password.
pub async fn require_admin(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let expected = &state.config.admin_password;
    if expected.is_empty() {
        return api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Admin password is not configured",
        );
    }

    let authorized = bearer_token(&request).is_some_and(|provided| verify_password(expected, provided));
    if !authorized {
        return api_error(StatusCode::UNAUTHORIZED, "Authentication required");
    }
    next.run(request).await
}

/// Extract the token from an `Authorization: Bearer ...` header.
fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}
