//! Shared fixtures for API integration tests.
//!
//! [`build_test_app`] mirrors the router construction in `main.rs` (via
//! [`questlog_api::router::build_app_router`]) so integration tests
//! exercise the same middleware stack that production uses. The clock is
//! pinned so plan days and streaks are deterministic.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use questlog_api::auth::jwt::{generate_access_token, JwtConfig};
use questlog_api::config::ServerConfig;
use questlog_api::router::build_app_router;
use questlog_api::state::AppState;
use questlog_core::clock::FixedClock;
use questlog_core::planning::PlanPolicy;
use questlog_core::types::{DbId, Timestamp};

/// The pinned test day (UTC).
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
}

/// The pinned test instant, noon on [`test_day`].
pub fn test_now() -> Timestamp {
    test_day().and_hms_opt(12, 0, 0).unwrap().and_utc()
}

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
        plan: PlanPolicy::default(),
    }
}

/// Build the full application router at the pinned test instant.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_at(pool, test_now())
}

/// Build the full application router with the clock pinned to `now`.
pub fn build_test_app_at(pool: PgPool, now: Timestamp) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        clock: Arc::new(FixedClock(now)),
    };
    build_app_router(state, &config)
}

/// Mint a valid bearer token for the given user.
pub fn auth_token(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).unwrap()
}

/// Issue a GET request, optionally authenticated.
pub async fn get(app: &Router, path: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body, optionally authenticated.
pub async fn post_json(
    app: &Router,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Catalog fixtures
// ---------------------------------------------------------------------------

/// Deactivate the migration seed catalog so tests control eligibility.
pub async fn deactivate_seed_catalog(pool: &PgPool) {
    sqlx::query("UPDATE missions SET is_active = FALSE")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("UPDATE dex_cards SET is_active = FALSE")
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_mission(
    pool: &PgPool,
    title: &str,
    mission_type: &str,
    xp_reward: i32,
) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO missions (title, mission_type, xp_reward) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(title)
    .bind(mission_type)
    .bind(xp_reward)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

pub async fn insert_dex_card(pool: &PgPool, name: &str, rule_type: &str, value: i32) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO dex_cards (name, unlock_rule_type, unlock_rule_value) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(rule_type)
    .bind(value)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}
