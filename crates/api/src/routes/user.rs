//! Route definitions for the caller's progression views.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET    /stats       -> stats
/// GET    /skill-xp    -> skill_xp
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(user::stats))
        .route("/skill-xp", get(user::skill_xp))
}
