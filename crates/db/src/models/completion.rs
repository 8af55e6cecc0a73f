//! Completion request DTO.
//!
//! Completion rows themselves are write-only audit records; nothing in the
//! engine reads them back as full entities, so only the request body is
//! modeled here.

use serde::Deserialize;

/// Request body for completing an assignment.
#[derive(Debug, Default, Deserialize)]
pub struct CompleteMission {
    pub evidence_url: Option<String>,
    pub reflection: Option<String>,
}
