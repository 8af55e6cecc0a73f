//! Handlers for the caller's mission assignments.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use questlog_core::types::DbId;
use questlog_db::models::completion::CompleteMission;
use questlog_db::repositories::{AssignmentRepo, ProgressionRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/assignments/today
///
/// Today's plan joined with mission display fields.
pub async fn today(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let plan =
        AssignmentRepo::list_for_day_with_missions(&state.pool, auth.user_id, state.clock.today())
            .await?;
    Ok(Json(DataResponse { data: plan }))
}

/// POST /api/v1/assignments/{id}/complete
///
/// Score a completion: flip the assignment, award XP with bonuses, fold the
/// delta into level/streak state, and grant any newly satisfied DEX
/// unlocks -- all in one transaction. A missing or foreign assignment is
/// 404; a repeated completion is 409, with XP awarded exactly once.
pub async fn complete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(assignment_id): Path<DbId>,
    body: Option<Json<CompleteMission>>,
) -> AppResult<impl IntoResponse> {
    let input = body.map(|Json(b)| b).unwrap_or_default();

    let outcome = ProgressionRepo::complete_assignment(
        &state.pool,
        auth.user_id,
        assignment_id,
        &input,
        state.clock.now(),
        state.clock.today(),
    )
    .await?;

    let summary = outcome.into_result(assignment_id)?;

    tracing::info!(
        user_id = auth.user_id,
        assignment_id,
        xp_gained = summary.xp_gained,
        leveled_up = summary.leveled_up,
        new_unlocks = summary.new_unlocks,
        "Mission completed"
    );

    Ok(Json(DataResponse { data: summary }))
}
