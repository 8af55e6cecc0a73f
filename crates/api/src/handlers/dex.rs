//! Handler for the DEX collection view.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use questlog_db::repositories::DexCardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dex
///
/// All active DEX cards flagged with the caller's unlock state. Locked
/// cards are listed but marked, so the collection renders as a grid of
/// silhouettes.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let cards = DexCardRepo::list_with_state(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: cards }))
}
