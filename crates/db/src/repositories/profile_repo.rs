//! Repository for the `profiles` table.

use questlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::Profile;

const COLUMNS: &str = "user_id, track_id, time_daily, created_at, updated_at";

/// Read access to user preferences. Profiles are written by out-of-scope
/// onboarding/settings flows; a missing row is a valid state.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch a user's profile, if one exists.
    pub async fn get(pool: &PgPool, user_id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
