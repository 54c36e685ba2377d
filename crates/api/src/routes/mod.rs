//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod auth;
pub mod clients;
pub mod health;
pub mod inventory;
pub mod manifest;
pub mod seed;

/// Creates the API router with the auth middleware layered on top.
///
/// The middleware itself decides which path prefixes need a session, so
/// public and protected routes share one router.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(seed::routes())
        .merge(manifest::routes())
        .merge(clients::routes())
        .merge(inventory::routes())
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}
