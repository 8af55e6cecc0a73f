//! Route definitions for the DEX collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::dex;
use crate::state::AppState;

/// Routes mounted at `/dex`.
///
/// ```text
/// GET    /    -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dex::list))
}
