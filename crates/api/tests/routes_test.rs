//! End-to-end route tests against an in-memory database.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use serde_json::{Value, json};
use tower::ServiceExt;

use estratosfera_api::{AppState, create_router};
use estratosfera_db::migration::Migrator;
use estratosfera_shared::{AppConfig, JwtService};

async fn test_app() -> (Router, AppState) {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // A single pooled connection keeps the in-memory database alive.
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("in-memory connection");
    Migrator::up(&db, None).await.expect("migrations");

    let config = AppConfig::default();
    let state = AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(JwtService::new(&config.auth)),
        config: Arc::new(config),
    };
    (create_router(state.clone()), state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn manifest_is_public() {
    let (app, _) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/manifest.webmanifest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Estratosfera App");
    assert_eq!(body["theme_color"], "#020617");
}

#[tokio::test]
async fn seed_is_idempotent_and_never_leaks_the_hash() {
    let (app, state) = test_app().await;

    let first = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/seed")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let body = body_json(first).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], state.config.seed.admin_email);
    assert!(body["user"].get("password_hash").is_none());

    let second = app
        .oneshot(
            Request::builder()
                .uri("/api/seed")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    let users = estratosfera_db::UserRepository::new((*state.db).clone())
        .list_all()
        .await
        .unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn login_flow_issues_a_working_token() {
    let (app, state) = test_app().await;

    // Seed the admin first.
    let seeded = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/seed")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(seeded.status(), StatusCode::OK);

    let bad = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "email": state.config.seed.admin_email,
                        "password": "not-the-password"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);

    let good = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "email": state.config.seed.admin_email,
                        "password": state.config.seed.admin_password
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(good.status(), StatusCode::OK);
    let body = body_json(good).await;
    let token = body["token"].as_str().unwrap().to_owned();
    assert!(body["expires_in"].as_i64().unwrap() > 0);

    // The issued token opens a protected route.
    let listing = app
        .oneshot(
            Request::builder()
                .uri("/api/clients")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(listing.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_routes_reject_missing_and_bad_tokens() {
    let (app, _) = test_app().await;

    let missing = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/inventory")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(missing).await;
    assert_eq!(body["error"], "missing_token");

    let garbage = app
        .oneshot(
            Request::builder()
                .uri("/api/clients")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(garbage).await;
    assert_eq!(body["error"], "invalid_token");
}
