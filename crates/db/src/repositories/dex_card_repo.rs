//! Repository for the `dex_cards` catalog and `user_dex_unlocks` join table.
//!
//! Grants happen only inside the completion transaction
//! ([`crate::repositories::ProgressionRepo`]); this repository covers the
//! collection view.

use questlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::dex_card::DexCardWithState;

/// Read access to the DEX collection.
pub struct DexCardRepo;

impl DexCardRepo {
    /// All active cards flagged with the user's unlock state, locked cards
    /// included.
    pub async fn list_with_state(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DexCardWithState>, sqlx::Error> {
        sqlx::query_as::<_, DexCardWithState>(
            "SELECT c.id, c.name, c.description, c.unlock_rule_type, c.unlock_rule_value, \
                    (u.id IS NOT NULL) AS unlocked, u.unlocked_at \
             FROM dex_cards c \
             LEFT JOIN user_dex_unlocks u ON u.dex_card_id = c.id AND u.user_id = $1 \
             WHERE c.is_active = TRUE \
             ORDER BY c.unlock_rule_type, c.unlock_rule_value, c.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
