//! Client listing (session required).

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::AppState;
use estratosfera_db::ClientRepository;

/// Creates the client routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/clients", get(list_clients))
}

/// GET /api/clients - List all clients.
async fn list_clients(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ClientRepository::new((*state.db).clone());
    match repo.find_all().await {
        Ok(clients) => Json(clients).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list clients");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal_error" })),
            )
                .into_response()
        }
    }
}
