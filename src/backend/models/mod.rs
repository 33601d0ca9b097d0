pub mod audit_log;
pub mod common;
pub mod content_record;
pub mod init;
pub mod permission;

// Re-export common types/enums for easier access
pub use common::*;
pub use content_record::{ContentRecord, NewContent, VaultStatistics};
pub use permission::PermissionStatus;
