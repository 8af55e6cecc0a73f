//! User preference profile model.

use questlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `profiles` table.
///
/// Written by out-of-scope onboarding/settings flows; the engine only reads
/// it (track affinity and daily time budget) and tolerates its absence.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub user_id: DbId,
    pub track_id: Option<DbId>,
    /// Daily time budget in minutes.
    pub time_daily: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
