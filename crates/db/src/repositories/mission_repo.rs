//! Repository for the read-only `missions` catalog.

use questlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::mission::Mission;

/// Column list for `missions` queries.
const COLUMNS: &str = "id, title, description, mission_type, difficulty, xp_reward, \
     skill_id, track_id, is_active, created_at, updated_at";

/// Read access to the mission catalog.
pub struct MissionRepo;

impl MissionRepo {
    /// List active missions eligible for a user: universal missions
    /// (NULL track) plus those matching the user's track.
    pub async fn list_candidates(
        pool: &PgPool,
        track_id: Option<DbId>,
    ) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM missions \
             WHERE is_active = TRUE \
               AND (track_id IS NULL OR track_id = $1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }
}
