//! Inventory listing (session required).

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::AppState;
use estratosfera_db::InventoryRepository;

/// Creates the inventory routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/inventory", get(list_renewables))
}

/// GET /api/inventory - List renewable accounts with their provider.
async fn list_renewables(State(state): State<AppState>) -> impl IntoResponse {
    let repo = InventoryRepository::new((*state.db).clone());
    match repo.renewables().await {
        Ok(rows) => {
            let payload: Vec<_> = rows
                .into_iter()
                .map(|(account, provider)| {
                    json!({
                        "account": account,
                        "provider": provider.map(|p| p.nombre),
                    })
                })
                .collect();
            Json(payload).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list inventory");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal_error" })),
            )
                .into_response()
        }
    }
}
