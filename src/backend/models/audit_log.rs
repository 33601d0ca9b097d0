use crate::models::common::{BlockHeight, ContentId};
use candid::{CandidType, Principal};
use serde::{Deserialize, Serialize};

/// Represents a single entry in the history of a content item.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuditLogEntry {
    /// Host height at which the action committed.
    pub height: BlockHeight,
    /// Principal ID of the actor performing the action.
    pub actor: Principal,
    pub action: LogAction,
    pub content_id: ContentId,
    /// Optional details about the action (e.g., the new owner).
    pub details: Option<String>,
}

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum LogAction {
    ContentCreated,
    OwnershipTransferred,
    ContentDeleted,
}
