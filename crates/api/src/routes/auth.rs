//! Login route issuing session tokens.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use estratosfera_core::auth::verify_password;
use estratosfera_db::UserRepository;
use estratosfera_shared::auth::{LoginRequest, LoginResponse};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}

/// POST /api/login - Authenticate a user and return a session token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new((*state.db).clone());

    let user = match user_repo.find_by_email(&payload.email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            info!(email = %payload.email, "Login attempt for non-existent user");
            return invalid_credentials();
        }
        Err(e) => {
            error!(error = %e, "Database error during login");
            return internal_error();
        }
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt - invalid password");
            return invalid_credentials();
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return internal_error();
        }
    }

    let token = match state
        .jwt_service
        .generate_token(user.id, &user.email, &user.role.to_string())
    {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Token generation error");
            return internal_error();
        }
    };

    Json(LoginResponse {
        token,
        expires_in: state.jwt_service.token_expires_in(),
    })
    .into_response()
}

fn invalid_credentials() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "invalid_credentials",
            "message": "Invalid email or password"
        })),
    )
        .into_response()
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred during login"
        })),
    )
        .into_response()
}
