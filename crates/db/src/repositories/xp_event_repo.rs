//! Repository for the `xp_events` ledger.
//!
//! Ledger rows are only ever inserted inside the completion transaction;
//! this repository covers the read side.

use questlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::xp_event::SkillXpTotal;

/// Read access to the XP ledger.
pub struct XpEventRepo;

impl XpEventRepo {
    /// Total ledger XP for a user. `user_stats.xp_total` must always equal
    /// this sum; reconciliation checks compare the two.
    pub async fn total_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COALESCE(SUM(xp), 0)::BIGINT FROM xp_events WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Ledger XP summed per skill, for the skills view. Events without a
    /// skill attribution are left out.
    pub async fn totals_by_skill(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SkillXpTotal>, sqlx::Error> {
        sqlx::query_as::<_, SkillXpTotal>(
            "SELECT s.id AS skill_id, s.name AS skill_name, \
                    COALESCE(SUM(e.xp), 0)::BIGINT AS xp_total \
             FROM skills s \
             LEFT JOIN xp_events e ON e.skill_id = s.id AND e.user_id = $1 \
             WHERE s.is_active = TRUE \
             GROUP BY s.id, s.name \
             ORDER BY s.name",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
