//! Seed route: the HTTP form of the admin upsert.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::AppState;
use estratosfera_ops::seed::seed_admin;

/// Creates the seed route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/seed", get(seed))
}

/// GET /api/seed - Upsert the admin account.
///
/// Failure detail stays in the logs; the client only sees a generic
/// error envelope.
async fn seed(State(state): State<AppState>) -> impl IntoResponse {
    match seed_admin(&state.db, &state.config.seed).await {
        Ok(outcome) => {
            Json(json!({ "success": true, "user": outcome.user })).into_response()
        }
        Err(e) => {
            error!(error = %e, "Seed route failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error seeding" })),
            )
                .into_response()
        }
    }
}
