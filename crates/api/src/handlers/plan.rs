//! Handler for daily plan generation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use questlog_db::models::assignment::GeneratePlan;
use questlog_db::repositories::PlanRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/plan/generate
///
/// Generate (or top up) the caller's plan for today. Idempotent without
/// `force`; with `force`, still-assigned missions are discarded and
/// re-rolled while completed work stays. Zero eligible missions is a
/// degenerate success (`no_candidates: true`), not an error.
pub async fn generate(
    auth: AuthUser,
    State(state): State<AppState>,
    body: Option<Json<GeneratePlan>>,
) -> AppResult<impl IntoResponse> {
    let input = body.map(|Json(b)| b).unwrap_or_default();

    let summary = PlanRepo::generate(
        &state.pool,
        auth.user_id,
        &state.config.plan,
        input.force,
        state.clock.today(),
        state.clock.now(),
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        created = summary.created,
        force = input.force,
        "Plan generation handled"
    );

    Ok(Json(DataResponse { data: summary }))
}
