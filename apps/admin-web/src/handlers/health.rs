//! Health check endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::warn;

use crate::state::AppState;

/// `GET /health`: `OK` when the database answers `SELECT 1`.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    if state.db().health_check().await {
        (StatusCode::OK, "OK")
    } else {
        warn!("Health check failed: database unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_util::{body_string, get, test_app, test_state};

    #[tokio::test]
    async fn test_health_ok() {
        let app = test_app().await;

        let resp = get(&app, "/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "OK");
    }

    #[tokio::test]
    async fn test_health_after_close_is_unavailable() {
        let state = test_state().await;
        let app = crate::router(state.clone());
        state.db().close().await;

        let resp = get(&app, "/health").await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
