//! DEX card models.

use questlog_core::error::CoreError;
use questlog_core::types::{DbId, Timestamp};
use questlog_core::unlocks::UnlockRule;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `dex_cards` catalog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DexCard {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub unlock_rule_type: String,
    pub unlock_rule_value: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl DexCard {
    /// The typed unlock rule. The column carries a CHECK constraint, so a
    /// parse failure means schema drift.
    pub fn rule(&self) -> Result<UnlockRule, CoreError> {
        UnlockRule::from_parts(&self.unlock_rule_type, self.unlock_rule_value)
    }
}

/// A DEX card flagged with the caller's unlock state, for the collection
/// view. Locked cards are listed but marked.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DexCardWithState {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub unlock_rule_type: String,
    pub unlock_rule_value: i32,
    pub unlocked: bool,
    pub unlocked_at: Option<Timestamp>,
}
