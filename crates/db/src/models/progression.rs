//! Result types for the completion transaction.

use questlog_core::types::DbId;
use serde::Serialize;

/// What the completion transaction produced for a successfully scored
/// assignment.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionSummary {
    /// XP awarded by this completion, bonuses included.
    pub xp_gained: i32,
    pub xp_total: i64,
    pub level: i32,
    pub leveled_up: bool,
    pub streak_current: i32,
    pub streak_best: i32,
    /// DEX cards newly granted by this completion.
    pub new_unlocks: i64,
}

/// Outcome of attempting to complete an assignment. The two refusals are
/// distinct, user-visible conditions detected before any mutation commits.
#[derive(Debug)]
pub enum CompleteOutcome {
    Completed(CompletionSummary),
    /// No such assignment, or it belongs to another user.
    NotFound,
    /// The status flip lost: the assignment was already completed.
    AlreadyCompleted,
}

impl CompleteOutcome {
    /// Convert to a typed domain error, keeping the summary on success.
    pub fn into_result(
        self,
        assignment_id: DbId,
    ) -> Result<CompletionSummary, questlog_core::error::CoreError> {
        use questlog_core::error::CoreError;
        match self {
            CompleteOutcome::Completed(summary) => Ok(summary),
            CompleteOutcome::NotFound => Err(CoreError::NotFound {
                entity: "Assignment",
                id: assignment_id,
            }),
            CompleteOutcome::AlreadyCompleted => {
                Err(CoreError::AlreadyCompleted { id: assignment_id })
            }
        }
    }
}
