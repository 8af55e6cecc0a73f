//! The plan generation flow: quota, candidate filtering, random selection,
//! batch insert.

use chrono::NaiveDate;
use questlog_core::planning::{select_missions, Candidate, PlanPolicy};
use questlog_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::assignment::PlanSummary;
use crate::repositories::{AssignmentRepo, CompletionRepo, MissionRepo, ProfileRepo};

/// Owns the plan generation flow.
pub struct PlanRepo;

impl PlanRepo {
    /// Generate (or top up) the user's plan for `today`.
    ///
    /// Non-force calls are idempotent: once the day's plan meets quota the
    /// call is a no-op. Force discards the day's still-`assigned` missions
    /// and re-rolls -- completed work is never clawed back. The whole
    /// batch inserts as one statement, so a failure leaves no partial plan.
    pub async fn generate(
        pool: &PgPool,
        user_id: DbId,
        policy: &PlanPolicy,
        force: bool,
        today: NaiveDate,
        now: Timestamp,
    ) -> Result<PlanSummary, sqlx::Error> {
        let profile = ProfileRepo::get(pool, user_id).await?;
        let (track_id, time_daily) = match &profile {
            Some(p) => (p.track_id, p.time_daily),
            None => (None, None),
        };
        let quota = policy.quota(time_daily);

        let mut existing = AssignmentRepo::list_for_day(pool, user_id, today).await?;

        if !force && existing.len() >= quota {
            return Ok(PlanSummary {
                created: 0,
                total_today: existing.len(),
                no_candidates: false,
            });
        }

        if force {
            let removed =
                AssignmentRepo::delete_assigned_for_day(pool, user_id, today).await?;
            tracing::debug!(user_id, removed, "Discarded assigned missions for re-roll");
            existing = AssignmentRepo::list_for_day(pool, user_id, today).await?;
        }

        let slots = quota.saturating_sub(existing.len());
        if slots == 0 {
            return Ok(PlanSummary {
                created: 0,
                total_today: existing.len(),
                no_candidates: false,
            });
        }

        let missions = MissionRepo::list_candidates(pool, track_id).await?;
        let assigned_today = existing.iter().map(|a| a.mission_id).collect();
        let completed_ever = CompletionRepo::completed_mission_ids(pool, user_id)
            .await?
            .into_iter()
            .collect();

        // The rng must not live across an await, so selection runs in its
        // own sync scope.
        let picked = {
            let candidates: Vec<Candidate> = missions
                .iter()
                .filter_map(|m| {
                    m.kind().ok().map(|kind| Candidate { id: m.id, kind })
                })
                .collect();
            let mut rng = rand::rng();
            select_missions(&candidates, &assigned_today, &completed_ever, slots, &mut rng)
        };

        if picked.is_empty() {
            tracing::info!(user_id, "No eligible missions to assign");
            return Ok(PlanSummary {
                created: 0,
                total_today: existing.len(),
                no_candidates: true,
            });
        }

        let inserted =
            AssignmentRepo::insert_batch(pool, user_id, &picked, today, now).await?;

        tracing::info!(user_id, created = inserted.len(), "Plan generated");

        Ok(PlanSummary {
            created: inserted.len(),
            total_today: existing.len() + inserted.len(),
            no_candidates: false,
        })
    }
}
