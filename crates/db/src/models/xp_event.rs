//! XP ledger models.
//!
//! Ledger rows are write-only from the engine's point of view; reads are
//! aggregates, so only the aggregate row shape is modeled here.

use questlog_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// XP event source types.
pub mod source {
    pub const COMPLETION: &str = "completion";
}

/// Ledger XP summed per skill, joined with the skill name for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SkillXpTotal {
    pub skill_id: DbId,
    pub skill_name: String,
    pub xp_total: i64,
}
