//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-statement flows own their
//! transaction internally.

pub mod assignment_repo;
pub mod completion_repo;
pub mod dex_card_repo;
pub mod mission_repo;
pub mod plan_repo;
pub mod profile_repo;
pub mod progression_repo;
pub mod user_stats_repo;
pub mod xp_event_repo;

pub use assignment_repo::AssignmentRepo;
pub use completion_repo::CompletionRepo;
pub use dex_card_repo::DexCardRepo;
pub use mission_repo::MissionRepo;
pub use plan_repo::PlanRepo;
pub use profile_repo::ProfileRepo;
pub use progression_repo::ProgressionRepo;
pub use user_stats_repo::UserStatsRepo;
pub use xp_event_repo::XpEventRepo;
