//! Handlers for the caller's progression views.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use questlog_db::repositories::{UserStatsRepo, XpEventRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/user/stats
///
/// The caller's progression rollup, created zeroed on first access.
pub async fn stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = UserStatsRepo::get_or_create(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/user/skill-xp
///
/// Ledger XP summed per active skill.
pub async fn skill_xp(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let totals = XpEventRepo::totals_by_skill(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: totals }))
}
