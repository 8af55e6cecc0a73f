//! Repository for the `completions` audit table.
//!
//! Completion rows are only ever inserted inside the completion transaction
//! ([`crate::repositories::ProgressionRepo`]); this repository covers the
//! read side.

use questlog_core::types::DbId;
use sqlx::PgPool;

/// Read access to completion history.
pub struct CompletionRepo;

impl CompletionRepo {
    /// Ids of every mission the user has ever completed. The planner uses
    /// this to keep finished side/main missions off future plans.
    pub async fn completed_mission_ids(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT DISTINCT mission_id FROM completions WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
