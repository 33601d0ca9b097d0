// src/backend/models/permission.rs
use candid::CandidType;
use serde::{Deserialize, Serialize};

/// Access decision for one (content item, user) pair.
#[derive(CandidType, Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PermissionStatus {
    pub has_explicit_permission: bool,
    pub is_owner: bool,
    pub can_access: bool,
}

impl PermissionStatus {
    pub fn new(has_explicit_permission: bool, is_owner: bool) -> Self {
        Self {
            has_explicit_permission,
            is_owner,
            can_access: has_explicit_permission || is_owner,
        }
    }
}
