//! Repository for the `mission_assignments` table.

use chrono::NaiveDate;
use questlog_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::assignment::{Assignment, AssignmentWithMission};

/// Column list for `mission_assignments` queries.
const COLUMNS: &str =
    "id, user_id, mission_id, status, assigned_on, assigned_at, completed_at";

/// Assignment storage. The status flip to `completed` lives in
/// [`crate::repositories::ProgressionRepo`], inside the completion
/// transaction.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// All assignments on a user's plan for the given day, any status.
    pub async fn list_for_day(
        pool: &PgPool,
        user_id: DbId,
        day: NaiveDate,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mission_assignments \
             WHERE user_id = $1 AND assigned_on = $2 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(user_id)
            .bind(day)
            .fetch_all(pool)
            .await
    }

    /// The day's plan joined with mission display fields.
    pub async fn list_for_day_with_missions(
        pool: &PgPool,
        user_id: DbId,
        day: NaiveDate,
    ) -> Result<Vec<AssignmentWithMission>, sqlx::Error> {
        sqlx::query_as::<_, AssignmentWithMission>(
            "SELECT a.id, a.mission_id, a.status, a.assigned_on, a.completed_at, \
                    m.title, m.description, m.mission_type, m.difficulty, m.xp_reward, m.skill_id \
             FROM mission_assignments a \
             JOIN missions m ON m.id = a.mission_id \
             WHERE a.user_id = $1 AND a.assigned_on = $2 \
             ORDER BY a.id",
        )
        .bind(user_id)
        .bind(day)
        .fetch_all(pool)
        .await
    }

    /// Delete the day's assignments still in `assigned` status. Completed
    /// work is never clawed back. Returns the number of rows removed.
    pub async fn delete_assigned_for_day(
        pool: &PgPool,
        user_id: DbId,
        day: NaiveDate,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM mission_assignments \
             WHERE user_id = $1 AND assigned_on = $2 AND status = 'assigned'",
        )
        .bind(user_id)
        .bind(day)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Insert one generation's worth of assignments as a single batch, so a
    /// failed invocation leaves no partial plan behind.
    pub async fn insert_batch(
        pool: &PgPool,
        user_id: DbId,
        mission_ids: &[DbId],
        day: NaiveDate,
        now: Timestamp,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        if mission_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "INSERT INTO mission_assignments (user_id, mission_id, status, assigned_on, assigned_at) \
             SELECT $1, m, 'assigned', $3, $4 FROM UNNEST($2::BIGINT[]) AS m \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(user_id)
            .bind(mission_ids)
            .bind(day)
            .bind(now)
            .fetch_all(pool)
            .await
    }
}
