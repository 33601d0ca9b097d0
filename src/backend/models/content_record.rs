// src/backend/models/content_record.rs
use crate::models::common::{BlockHeight, ContentId, PrincipalId, StorageBytes};
use candid::CandidType;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One registered content item. Only `creator` changes after creation.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContentRecord {
    pub id: ContentId,
    pub title: String,
    pub creator: PrincipalId,
    pub size_bytes: StorageBytes,
    pub created_at: BlockHeight,
    pub summary: String,
    pub labels: Vec<String>,
}

/// Caller-supplied metadata for `create_content`.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, Validate)]
pub struct NewContent {
    #[validate(length(min = 1, max = 64))]
    pub title: String,
    #[validate(range(min = 1, max = 999_999_999))]
    pub size_bytes: StorageBytes,
    #[validate(length(min = 1, max = 128))]
    pub summary: String,
    #[validate(length(min = 1, max = 10))]
    pub labels: Vec<String>,
}

impl NewContent {
    pub fn into_record(self, id: ContentId, creator: PrincipalId, created_at: BlockHeight) -> ContentRecord {
        ContentRecord {
            id,
            title: self.title,
            creator,
            size_bytes: self.size_bytes,
            created_at,
            summary: self.summary,
            labels: self.labels,
        }
    }
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VaultStatistics {
    /// Last assigned content id, which is also the number of items ever created.
    pub total_items: ContentId,
    pub administrator: PrincipalId,
}
