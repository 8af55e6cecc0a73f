//! Route definitions for plan generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::plan;
use crate::state::AppState;

/// Routes mounted at `/plan`.
///
/// ```text
/// POST   /generate    -> generate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(plan::generate))
}
