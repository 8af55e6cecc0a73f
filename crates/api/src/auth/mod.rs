//! Caller identity plumbing.
//!
//! Identity is issued elsewhere and propagated here as a signed bearer
//! token; this module only validates and decodes it.

pub mod jwt;
