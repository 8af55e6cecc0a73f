pub mod assignments;
pub mod dex;
pub mod health;
pub mod plan;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy (all routes require authentication):
///
/// ```text
/// /plan/generate                POST  generate or top up today's plan
///
/// /assignments/today            GET   today's plan with mission details
/// /assignments/{id}/complete    POST  score a completion
///
/// /user/stats                   GET   progression rollup
/// /user/skill-xp                GET   ledger XP per skill
///
/// /dex                          GET   DEX collection with unlock state
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/plan", plan::router())
        .nest("/assignments", assignments::router())
        .nest("/user", user::router())
        .nest("/dex", dex::router())
}
