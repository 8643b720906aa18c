//! Router-level session filter

use crate::{ApiError, AppState};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Rejects requests without a correctly signed session token before they
/// reach the handler, with the same 403 body the access guard uses. Identity lookup and admin checks are left to the
/// handler's `AccessGuard` call.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match state.sessions.authenticate(request.headers()) {
        Ok(claims) => {
            log::debug!("Session accepted for {}", claims.email);
            next.run(request).await
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
