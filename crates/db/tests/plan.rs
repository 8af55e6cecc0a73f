//! Integration tests for plan generation: quota, idempotence, force
//! semantics, track filtering, and repeat avoidance.

mod common;

use common::{
    assign_and_complete, at_noon, day, deactivate_seed_catalog, insert_mission,
    insert_profile, insert_track, insert_tracked_mission,
};
use questlog_core::planning::PlanPolicy;
use sqlx::PgPool;

use questlog_db::models::assignment::status;
use questlog_db::repositories::{AssignmentRepo, PlanRepo};

const USER: i64 = 202;

async fn generate(pool: &PgPool, user: i64, force: bool) -> questlog_db::models::assignment::PlanSummary {
    let on = day(2025, 6, 10);
    PlanRepo::generate(pool, user, &PlanPolicy::default(), force, on, at_noon(on))
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Quota
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn base_quota_is_two_missions(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    insert_mission(&pool, "Daily A", "daily", 10).await;
    insert_mission(&pool, "Side A", "side", 25).await;
    insert_mission(&pool, "Side B", "side", 25).await;
    insert_profile(&pool, USER, None, Some(30)).await;

    let summary = generate(&pool, USER, false).await;

    assert_eq!(summary.created, 2);
    assert_eq!(summary.total_today, 2);
    assert!(!summary.no_candidates);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn extended_time_budget_raises_quota_to_three(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    insert_mission(&pool, "Daily A", "daily", 10).await;
    insert_mission(&pool, "Side A", "side", 25).await;
    insert_mission(&pool, "Side B", "side", 25).await;
    insert_mission(&pool, "Main A", "main", 60).await;
    insert_profile(&pool, USER, None, Some(60)).await;

    let summary = generate(&pool, USER, false).await;

    assert_eq!(summary.created, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_profile_uses_base_quota(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    insert_mission(&pool, "Daily A", "daily", 10).await;
    insert_mission(&pool, "Side A", "side", 25).await;
    insert_mission(&pool, "Side B", "side", 25).await;

    let summary = generate(&pool, USER, false).await;

    assert_eq!(summary.created, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn at_most_one_daily_per_plan(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    insert_mission(&pool, "Daily A", "daily", 10).await;
    insert_mission(&pool, "Daily B", "daily", 10).await;
    insert_mission(&pool, "Daily C", "daily", 10).await;
    insert_mission(&pool, "Side A", "side", 25).await;
    insert_profile(&pool, USER, None, Some(90)).await;

    let summary = generate(&pool, USER, false).await;

    // One daily plus the single side mission; dailies never fill the rest.
    assert_eq!(summary.created, 2);
    let plan = AssignmentRepo::list_for_day_with_missions(&pool, USER, day(2025, 6, 10))
        .await
        .unwrap();
    let dailies = plan.iter().filter(|a| a.mission_type == "daily").count();
    assert_eq!(dailies, 1);
}

// ---------------------------------------------------------------------------
// Idempotence and force
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeat_generation_is_a_noop(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    insert_mission(&pool, "Daily A", "daily", 10).await;
    insert_mission(&pool, "Side A", "side", 25).await;

    let first = generate(&pool, USER, false).await;
    assert_eq!(first.created, 2);

    let before = AssignmentRepo::list_for_day(&pool, USER, day(2025, 6, 10))
        .await
        .unwrap();

    let second = generate(&pool, USER, false).await;
    assert_eq!(second.created, 0);
    assert_eq!(second.total_today, 2);

    let after = AssignmentRepo::list_for_day(&pool, USER, day(2025, 6, 10))
        .await
        .unwrap();
    let before_ids: Vec<i64> = before.iter().map(|a| a.id).collect();
    let after_ids: Vec<i64> = after.iter().map(|a| a.id).collect();
    assert_eq!(before_ids, after_ids, "the assignment set must be unchanged");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn force_rerolls_assigned_but_keeps_completed(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    insert_mission(&pool, "Daily A", "daily", 10).await;
    insert_mission(&pool, "Side A", "side", 25).await;
    insert_mission(&pool, "Side B", "side", 25).await;
    insert_mission(&pool, "Side C", "side", 25).await;
    let done = insert_mission(&pool, "Done already", "main", 60).await;

    // One mission completed earlier today stays on the plan.
    assign_and_complete(&pool, USER, done, day(2025, 6, 10)).await;

    let first = generate(&pool, USER, false).await;
    assert_eq!(first.created, 1, "one slot was already used by completed work");

    let summary = generate(&pool, USER, true).await;
    assert_eq!(summary.total_today, 2);

    let plan = AssignmentRepo::list_for_day(&pool, USER, day(2025, 6, 10))
        .await
        .unwrap();
    let completed: Vec<_> = plan.iter().filter(|a| a.status == status::COMPLETED).collect();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].mission_id, done);
}

// ---------------------------------------------------------------------------
// Candidate filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_tracks_missions_are_excluded(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    let mine = insert_track(&pool, "Mine", "mine").await;
    let other = insert_track(&pool, "Other", "other").await;
    insert_tracked_mission(&pool, "My side", "side", 25, Some(mine)).await;
    insert_tracked_mission(&pool, "Their side", "side", 25, Some(other)).await;
    insert_tracked_mission(&pool, "Universal side", "side", 25, None).await;
    insert_profile(&pool, USER, Some(mine), Some(90)).await;

    let summary = generate(&pool, USER, false).await;

    // No daily exists; both eligible side missions are assigned.
    assert_eq!(summary.created, 2);
    let plan = AssignmentRepo::list_for_day_with_missions(&pool, USER, day(2025, 6, 10))
        .await
        .unwrap();
    assert!(plan.iter().all(|a| a.title != "Their side"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn untracked_user_gets_universal_missions_only(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    let track = insert_track(&pool, "Some", "some").await;
    insert_tracked_mission(&pool, "Tracked side", "side", 25, Some(track)).await;
    insert_tracked_mission(&pool, "Universal side", "side", 25, None).await;

    let summary = generate(&pool, USER, false).await;

    assert_eq!(summary.created, 1);
    let plan = AssignmentRepo::list_for_day_with_missions(&pool, USER, day(2025, 6, 10))
        .await
        .unwrap();
    assert_eq!(plan[0].title, "Universal side");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completed_side_missions_never_return(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    let done = insert_mission(&pool, "Finished side", "side", 25).await;
    insert_mission(&pool, "Fresh side", "side", 25).await;

    // Completed on an earlier day.
    assign_and_complete(&pool, USER, done, day(2025, 6, 9)).await;

    let summary = generate(&pool, USER, false).await;

    assert_eq!(summary.created, 1);
    let plan = AssignmentRepo::list_for_day_with_missions(&pool, USER, day(2025, 6, 10))
        .await
        .unwrap();
    assert_eq!(plan[0].title, "Fresh side");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completed_dailies_stay_in_rotation(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    let daily = insert_mission(&pool, "Recurring daily", "daily", 10).await;

    assign_and_complete(&pool, USER, daily, day(2025, 6, 9)).await;

    let summary = generate(&pool, USER, false).await;

    assert_eq!(summary.created, 1);
    let plan = AssignmentRepo::list_for_day_with_missions(&pool, USER, day(2025, 6, 10))
        .await
        .unwrap();
    assert_eq!(plan[0].mission_id, daily);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_catalog_is_degenerate_success(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;

    let summary = generate(&pool, USER, false).await;

    assert_eq!(summary.created, 0);
    assert!(summary.no_candidates);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_catalog_assigns_what_exists(pool: PgPool) {
    deactivate_seed_catalog(&pool).await;
    insert_mission(&pool, "Only daily", "daily", 10).await;
    insert_profile(&pool, USER, None, Some(90)).await;

    let summary = generate(&pool, USER, false).await;

    // Quota is three but only one candidate exists; that is not an error.
    assert_eq!(summary.created, 1);
    assert!(!summary.no_candidates);
}
