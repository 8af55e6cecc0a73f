//! Domain model structs and DTOs.
//!
//! Each submodule contains the `FromRow` + `Serialize` row structs the
//! engine actually reads back, plus `Deserialize` DTOs for the request
//! bodies that touch the entity. Write-only tables (completions, xp_events)
//! only model their DTO / aggregate shapes.

pub mod assignment;
pub mod completion;
pub mod dex_card;
pub mod mission;
pub mod profile;
pub mod progression;
pub mod user_stats;
pub mod xp_event;
