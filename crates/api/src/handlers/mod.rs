//! Request handlers, one module per resource.

pub mod assignments;
pub mod dex;
pub mod plan;
pub mod user;
