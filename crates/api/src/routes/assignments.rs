//! Route definitions for the caller's assignments.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assignments;
use crate::state::AppState;

/// Routes mounted at `/assignments`.
///
/// ```text
/// GET    /today            -> today
/// POST   /{id}/complete    -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/today", get(assignments::today))
        .route("/{id}/complete", post(assignments::complete))
}
