//! Mission catalog models.

use questlog_core::error::CoreError;
use questlog_core::planning::MissionKind;
use questlog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `missions` table. Read-only to the engine; the catalog is
/// maintained out of band.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub mission_type: String,
    pub difficulty: i16,
    pub xp_reward: i32,
    pub skill_id: Option<DbId>,
    /// `None` means the mission is universal (applies to every track).
    pub track_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Mission {
    /// The typed mission kind. The column carries a CHECK constraint, so a
    /// parse failure means schema drift.
    pub fn kind(&self) -> Result<MissionKind, CoreError> {
        self.mission_type.parse()
    }
}
