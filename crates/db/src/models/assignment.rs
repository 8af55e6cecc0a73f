//! Mission assignment models and DTOs.

use chrono::NaiveDate;
use questlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Assignment status values matching the `mission_assignments.status` CHECK
/// constraint.
pub mod status {
    pub const ASSIGNED: &str = "assigned";
    pub const COMPLETED: &str = "completed";
}

/// A row from the `mission_assignments` table: mission M on user U's plate
/// for day D.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub user_id: DbId,
    pub mission_id: DbId,
    pub status: String,
    /// The plan day (UTC calendar date).
    pub assigned_on: NaiveDate,
    pub assigned_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// An assignment joined with the mission fields the plan view displays.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssignmentWithMission {
    pub id: DbId,
    pub mission_id: DbId,
    pub status: String,
    pub assigned_on: NaiveDate,
    pub completed_at: Option<Timestamp>,
    pub title: String,
    pub description: String,
    pub mission_type: String,
    pub difficulty: i16,
    pub xp_reward: i32,
    pub skill_id: Option<DbId>,
}

/// Request body for plan generation.
#[derive(Debug, Default, Deserialize)]
pub struct GeneratePlan {
    /// Discard today's still-assigned missions and re-roll up to quota.
    #[serde(default)]
    pub force: bool,
}

/// Result summary for plan generation.
#[derive(Debug, Serialize)]
pub struct PlanSummary {
    /// Assignments created by this call (0 is a valid no-op).
    pub created: usize,
    /// Assignments on today's plan after the call, any status.
    pub total_today: usize,
    /// True when the catalog had no eligible missions left for this user --
    /// a degenerate success, not an error.
    pub no_candidates: bool,
}
