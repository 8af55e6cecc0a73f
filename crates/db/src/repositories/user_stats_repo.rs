//! Repository for the `user_stats` rollup table.

use questlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_stats::UserStats;

/// Column list for `user_stats` queries.
pub(crate) const COLUMNS: &str = "user_id, xp_total, level, streak_current, streak_best, \
     last_daily_completed_at, last_active_at, created_at, updated_at";

/// Read access to the progression rollup. Mutation happens only inside the
/// completion transaction ([`crate::repositories::ProgressionRepo`]).
pub struct UserStatsRepo;

impl UserStatsRepo {
    /// Fetch a user's stats row, creating a zeroed one on first access.
    pub async fn get_or_create(pool: &PgPool, user_id: DbId) -> Result<UserStats, sqlx::Error> {
        sqlx::query("INSERT INTO user_stats (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id)
            .execute(pool)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM user_stats WHERE user_id = $1");
        sqlx::query_as::<_, UserStats>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
