// src/backend/error.rs
use candid::CandidType;
use serde::Deserialize;
use thiserror::Error;

#[derive(CandidType, Deserialize, Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Reserved for administrator-only operations.
    #[error("Administrator rights needed")]
    AdminRightsNeeded,

    #[error("Content item not found")]
    ContentMissing,

    /// Reserved; ids are registry-assigned and never collide.
    #[error("Content item already exists")]
    DuplicateContent,

    #[error("Title or summary length out of bounds")]
    MetadataInvalid,

    #[error("Content size out of bounds")]
    SizeLimitExceeded,

    /// Reserved general-purpose access denial.
    #[error("Unauthorized access")]
    UnauthorizedAccess,

    #[error("Caller is not the content owner")]
    OwnerMismatch,

    #[error("Caller may not view this content item")]
    VisibilityBlocked,

    #[error("Labels violate count or length rules")]
    TagFormatError,

    // Reserved for a permission-granting entry point, which does not exist yet.
    #[error("Invalid permission grant")]
    InvalidPermissionGrant,

    #[error("Permission already granted")]
    PermissionDuplicate,

    #[error("Canister cycle balance too low for operation")]
    CycleLow,

    #[error("Internal canister error: {0}")]
    InternalError(String),
}
