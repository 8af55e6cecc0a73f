//! User progression rollup model.

use chrono::NaiveDate;
use questlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_stats` table, one per user.
///
/// `level` is always `level_for_xp(xp_total)`, and `xp_total` always equals
/// the user's ledger sum; both invariants are maintained inside the
/// completion transaction.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserStats {
    pub user_id: DbId,
    pub xp_total: i64,
    pub level: i32,
    pub streak_current: i32,
    pub streak_best: i32,
    /// Date (UTC) of the most recent daily-type completion.
    pub last_daily_completed_at: Option<NaiveDate>,
    pub last_active_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
