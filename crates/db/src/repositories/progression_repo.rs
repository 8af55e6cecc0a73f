//! The completion transaction: scoring, stats rollup, and unlock grants.
//!
//! Everything from the assignment status flip to the unlock grants commits
//! atomically. The status flip is a conditional update so a concurrent
//! duplicate observes zero rows and reports the conflict instead of
//! double-awarding XP; the stats row is locked (`FOR UPDATE`) so concurrent
//! completions of different assignments by the same user serialize instead
//! of losing updates.

use chrono::NaiveDate;
use questlog_core::leveling::level_for_xp;
use questlog_core::planning::MissionKind;
use questlog_core::scoring::completion_xp;
use questlog_core::streak::advance_streak;
use questlog_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::completion::CompleteMission;
use crate::models::dex_card::DexCard;
use crate::models::progression::{CompleteOutcome, CompletionSummary};
use crate::models::user_stats::UserStats;
use crate::models::xp_event::source;
use crate::repositories::user_stats_repo;

/// Owns the multi-statement completion flow.
pub struct ProgressionRepo;

impl ProgressionRepo {
    /// Complete an assignment for a user: flip the status, write the audit
    /// record and ledger entry, fold the XP delta into the stats rollup,
    /// and grant any newly satisfied DEX unlocks -- in one transaction.
    ///
    /// `today` is the caller's plan day; it drives streak continuity and is
    /// injected (with `now`) so tests can simulate day transitions.
    pub async fn complete_assignment(
        pool: &PgPool,
        user_id: DbId,
        assignment_id: DbId,
        input: &CompleteMission,
        now: Timestamp,
        today: NaiveDate,
    ) -> Result<CompleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Conditional status flip. Of two concurrent calls, exactly one
        // sees the row in `assigned` status.
        let flipped: Option<(DbId,)> = sqlx::query_as(
            "UPDATE mission_assignments \
             SET status = 'completed', completed_at = $3 \
             WHERE id = $1 AND user_id = $2 AND status = 'assigned' \
             RETURNING mission_id",
        )
        .bind(assignment_id)
        .bind(user_id)
        .bind(now)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((mission_id,)) = flipped else {
            // Distinguish the two refusals; nothing was mutated.
            let exists: Option<(DbId,)> = sqlx::query_as(
                "SELECT id FROM mission_assignments WHERE id = $1 AND user_id = $2",
            )
            .bind(assignment_id)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;

            return Ok(match exists {
                Some(_) => CompleteOutcome::AlreadyCompleted,
                None => CompleteOutcome::NotFound,
            });
        };

        let (mission_type, xp_reward, skill_id): (String, i32, Option<DbId>) = sqlx::query_as(
            "SELECT mission_type, xp_reward, skill_id FROM missions WHERE id = $1",
        )
        .bind(mission_id)
        .fetch_one(&mut *tx)
        .await?;

        let xp = completion_xp(
            xp_reward,
            input.reflection.as_deref(),
            input.evidence_url.as_deref(),
        );

        sqlx::query(
            "INSERT INTO completions (user_id, mission_id, evidence_url, reflection, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user_id)
        .bind(mission_id)
        .bind(&input.evidence_url)
        .bind(&input.reflection)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO xp_events (user_id, source_type, source_id, xp, skill_id, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user_id)
        .bind(source::COMPLETION)
        .bind(mission_id)
        .bind(xp.total())
        .bind(skill_id)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        // Lock the rollup row for the rest of the transaction, creating it
        // on the user's first completion.
        sqlx::query("INSERT INTO user_stats (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let stats_query = format!(
            "SELECT {} FROM user_stats WHERE user_id = $1 FOR UPDATE",
            user_stats_repo::COLUMNS
        );
        let stats: UserStats = sqlx::query_as(&stats_query)
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

        let is_daily = mission_type == MissionKind::Daily.as_str();

        let new_total = stats.xp_total + i64::from(xp.total());
        let new_level = level_for_xp(new_total);
        let new_streak = if is_daily {
            advance_streak(stats.streak_current, stats.last_daily_completed_at, today)
        } else {
            stats.streak_current
        };
        let new_best = stats.streak_best.max(new_streak);
        let last_daily: Option<NaiveDate> = is_daily.then_some(today);

        sqlx::query(
            "UPDATE user_stats \
             SET xp_total = $2, level = $3, streak_current = $4, streak_best = $5, \
                 last_daily_completed_at = COALESCE($6, last_daily_completed_at), \
                 last_active_at = $7, updated_at = $7 \
             WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(new_total)
        .bind(new_level)
        .bind(new_streak)
        .bind(new_best)
        .bind(last_daily)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let new_unlocks =
            grant_satisfied_unlocks(&mut tx, user_id, new_level, new_streak, now).await?;

        tx.commit().await?;

        tracing::debug!(
            user_id,
            assignment_id,
            xp_gained = xp.total(),
            new_level,
            new_streak,
            new_unlocks,
            "Assignment completed"
        );

        Ok(CompleteOutcome::Completed(CompletionSummary {
            xp_gained: xp.total(),
            xp_total: new_total,
            level: new_level,
            leveled_up: new_level > stats.level,
            streak_current: new_streak,
            streak_best: new_best,
            new_unlocks,
        }))
    }
}

/// Grant every active, not-yet-unlocked card whose rule the new state
/// satisfies. Conflict-ignore on the batch insert makes re-evaluation a set
/// union: racing grants of the same card collapse to one row.
async fn grant_satisfied_unlocks(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    user_id: DbId,
    level: i32,
    streak: i32,
    now: Timestamp,
) -> Result<i64, sqlx::Error> {
    let cards: Vec<DexCard> = sqlx::query_as(
        "SELECT id, name, description, unlock_rule_type, unlock_rule_value, is_active, created_at \
         FROM dex_cards WHERE is_active = TRUE",
    )
    .fetch_all(&mut **tx)
    .await?;

    let unlocked: Vec<(DbId,)> =
        sqlx::query_as("SELECT dex_card_id FROM user_dex_unlocks WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&mut **tx)
            .await?;
    let unlocked: std::collections::HashSet<DbId> = unlocked.into_iter().map(|(id,)| id).collect();

    let eligible: Vec<DbId> = cards
        .iter()
        .filter(|card| !unlocked.contains(&card.id))
        .filter(|card| card.rule().is_ok_and(|rule| rule.is_satisfied(level, streak)))
        .map(|card| card.id)
        .collect();

    if eligible.is_empty() {
        return Ok(0);
    }

    let result = sqlx::query(
        "INSERT INTO user_dex_unlocks (user_id, dex_card_id, unlocked_at) \
         SELECT $1, c, $3 FROM UNNEST($2::BIGINT[]) AS c \
         ON CONFLICT (user_id, dex_card_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(&eligible)
    .bind(now)
    .execute(&mut **tx)
    .await?;

    Ok(result.rows_affected() as i64)
}
