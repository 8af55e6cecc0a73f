//! Daily plan quota and mission selection policy.
//!
//! Selection is generic over [`rand::Rng`] so tests drive it with a seeded
//! generator; production passes `rand::rng()`.

use std::collections::HashSet;
use std::str::FromStr;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Mission kinds
// ---------------------------------------------------------------------------

/// Mission catalog type. Stored as lowercase text in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionKind {
    Daily,
    Side,
    Main,
}

impl MissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionKind::Daily => "daily",
            MissionKind::Side => "side",
            MissionKind::Main => "main",
        }
    }
}

impl FromStr for MissionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(MissionKind::Daily),
            "side" => Ok(MissionKind::Side),
            "main" => Ok(MissionKind::Main),
            other => Err(CoreError::Internal(format!(
                "Unknown mission type: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Quota policy
// ---------------------------------------------------------------------------

/// Tunable plan-size policy. The quota step at a single minutes threshold is
/// an observed heuristic, not a law, so all three numbers are configuration.
#[derive(Debug, Clone)]
pub struct PlanPolicy {
    /// Missions per day for users below the extended-time threshold.
    pub base_quota: usize,
    /// Missions per day for users at or above the threshold.
    pub extended_quota: usize,
    /// Daily time budget (minutes) at which the extended quota applies.
    pub extended_minutes: i32,
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self {
            base_quota: 2,
            extended_quota: 3,
            extended_minutes: 60,
        }
    }
}

impl PlanPolicy {
    /// Target number of active missions for a user with the given daily time
    /// budget. A missing budget gets the base quota.
    pub fn quota(&self, time_daily: Option<i32>) -> usize {
        match time_daily {
            Some(minutes) if minutes >= self.extended_minutes => self.extended_quota,
            _ => self.base_quota,
        }
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// A mission eligible for selection, as seen by the planner.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub id: DbId,
    pub kind: MissionKind,
}

/// Pick mission ids to fill `slots` plan slots.
///
/// `assigned_today` is excluded outright -- the same mission is never put on
/// the plate twice in one day. `completed_ever` is excluded from the
/// side/main pool only; daily missions repeat by nature.
///
/// At most one daily mission is picked (uniformly at random); remaining
/// slots are filled by uniform sampling without replacement from the
/// side/main pool. Fewer candidates than slots returns what exists; an empty
/// result is the caller's degenerate no-candidates success, not an error.
pub fn select_missions<R: Rng>(
    candidates: &[Candidate],
    assigned_today: &HashSet<DbId>,
    completed_ever: &HashSet<DbId>,
    slots: usize,
    rng: &mut R,
) -> Vec<DbId> {
    if slots == 0 {
        return Vec::new();
    }

    let mut dailies: Vec<DbId> = Vec::new();
    let mut others: Vec<DbId> = Vec::new();

    for candidate in candidates {
        if assigned_today.contains(&candidate.id) {
            continue;
        }
        match candidate.kind {
            MissionKind::Daily => dailies.push(candidate.id),
            MissionKind::Side | MissionKind::Main => {
                if !completed_ever.contains(&candidate.id) {
                    others.push(candidate.id);
                }
            }
        }
    }

    let mut picked = Vec::with_capacity(slots);

    if let Some(&daily) = dailies.choose(rng) {
        picked.push(daily);
    }

    let remaining = slots - picked.len();
    others.shuffle(rng);
    picked.extend(others.into_iter().take(remaining));

    picked
}
