//! Shared fixtures for the persistence-layer integration tests.
//!
//! Every test runs against a migration-provisioned database. The seed
//! catalog is deactivated up front so each test controls exactly which
//! missions and cards are eligible.

#![allow(dead_code)]

use chrono::NaiveDate;
use questlog_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use questlog_db::models::completion::CompleteMission;
use questlog_db::models::progression::{CompleteOutcome, CompletionSummary};
use questlog_db::repositories::ProgressionRepo;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A fixed instant within the given day, for `now` parameters.
pub fn at_noon(date: NaiveDate) -> Timestamp {
    date.and_hms_opt(12, 0, 0).unwrap().and_utc()
}

/// Deactivate the migration seed catalog so tests start from a blank slate.
pub async fn deactivate_seed_catalog(pool: &PgPool) {
    sqlx::query("UPDATE missions SET is_active = FALSE")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("UPDATE dex_cards SET is_active = FALSE")
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_track(pool: &PgPool, name: &str, slug: &str) -> DbId {
    let row: (DbId,) = sqlx::query_as("INSERT INTO tracks (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

pub async fn insert_mission(
    pool: &PgPool,
    title: &str,
    mission_type: &str,
    xp_reward: i32,
) -> DbId {
    insert_tracked_mission(pool, title, mission_type, xp_reward, None).await
}

pub async fn insert_tracked_mission(
    pool: &PgPool,
    title: &str,
    mission_type: &str,
    xp_reward: i32,
    track_id: Option<DbId>,
) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO missions (title, mission_type, xp_reward, track_id) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(title)
    .bind(mission_type)
    .bind(xp_reward)
    .bind(track_id)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

pub async fn insert_profile(
    pool: &PgPool,
    user_id: DbId,
    track_id: Option<DbId>,
    time_daily: Option<i32>,
) {
    sqlx::query("INSERT INTO profiles (user_id, track_id, time_daily) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(track_id)
        .bind(time_daily)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_dex_card(pool: &PgPool, name: &str, rule_type: &str, value: i32) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO dex_cards (name, unlock_rule_type, unlock_rule_value) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(rule_type)
    .bind(value)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

/// Put a mission on a user's plate for the given day, returning the
/// assignment id.
pub async fn assign(pool: &PgPool, user_id: DbId, mission_id: DbId, on: NaiveDate) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO mission_assignments (user_id, mission_id, assigned_on, assigned_at) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(user_id)
    .bind(mission_id)
    .bind(on)
    .bind(at_noon(on))
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

/// Complete an assignment with the given body on the given day, expecting
/// success.
pub async fn complete_on(
    pool: &PgPool,
    user_id: DbId,
    assignment_id: DbId,
    input: &CompleteMission,
    on: NaiveDate,
) -> CompletionSummary {
    let outcome =
        ProgressionRepo::complete_assignment(pool, user_id, assignment_id, input, at_noon(on), on)
            .await
            .unwrap();
    match outcome {
        CompleteOutcome::Completed(summary) => summary,
        other => panic!("expected completion, got {other:?}"),
    }
}

/// Assign a mission and complete it the same day, bare body.
pub async fn assign_and_complete(
    pool: &PgPool,
    user_id: DbId,
    mission_id: DbId,
    on: NaiveDate,
) -> CompletionSummary {
    let assignment_id = assign(pool, user_id, mission_id, on).await;
    complete_on(pool, user_id, assignment_id, &CompleteMission::default(), on).await
}
