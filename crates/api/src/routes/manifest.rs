//! Installable-app manifest descriptor.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::AppState;

/// GET /manifest.webmanifest - PWA manifest.
async fn manifest() -> Json<Value> {
    Json(json!({
        "name": "Estratosfera App",
        "short_name": "Estratosfera",
        "description": "Gestión inteligente de servicios de streaming",
        "start_url": "/",
        "display": "standalone",
        "background_color": "#020617",
        "theme_color": "#020617",
        "icons": [
            { "src": "/logo-navidad.jpg", "sizes": "192x192", "type": "image/jpeg" },
            { "src": "/logo-navidad.jpg", "sizes": "512x512", "type": "image/jpeg" }
        ]
    }))
}

/// Creates the manifest route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/manifest.webmanifest", get(manifest))
}
