// src/backend/services/content_service.rs
// Content registry: sequential ids, ownership and permission-gated reads.

use crate::{
    error::RegistryError,
    log_line, metrics,
    models::{
        audit_log::{AuditLogEntry, LogAction},
        BlockHeight, ContentId, ContentRecord, NewContent, PrincipalId, VaultStatistics,
    },
    services::permission_service,
    storage::{audit_logs, config, content},
    utils::validation::validate_new_content,
};

/// Registers a new content item owned by `caller`.
///
/// Validation runs before any write, so a rejected call leaves the counter
/// and both maps untouched.
///
/// # Arguments
/// * `caller` - Becomes the creator and receives the initial grant.
/// * `height` - Host height captured into `created_at`.
/// * `new_content` - Title, size, summary and labels.
///
/// # Returns
/// * `Result<ContentId, RegistryError>` - The freshly assigned id, equal to the
///   previous sequence value plus one.
pub fn create_content(
    caller: PrincipalId,
    height: BlockHeight,
    new_content: NewContent,
) -> Result<ContentId, RegistryError> {
    validate_new_content(&new_content)?;
    let id = content::peek_next_content_id()?;
    let record = new_content.into_record(id, caller, height);

    content::advance_sequence(id)?;
    content::insert_content(&record);
    permission_service::grant_creator(id, caller);

    if let Err(e) = metrics::record_content_created(record.size_bytes) {
        log_line!("WARN: metrics not updated for content {}: {}", id, e);
    }
    audit_logs::add_entry(AuditLogEntry {
        height,
        actor: caller,
        action: LogAction::ContentCreated,
        content_id: id,
        details: None,
    });
    log_line!("content_created id={} creator={} height={}", id, caller, height);
    Ok(id)
}

/// Loads a record and checks that `caller` is its current creator.
fn owned_record(caller: &PrincipalId, id: ContentId) -> Result<ContentRecord, RegistryError> {
    let record = content::get_content(id).ok_or(RegistryError::ContentMissing)?;
    if record.creator != *caller {
        return Err(RegistryError::OwnerMismatch);
    }
    Ok(record)
}

/// Hands the item to `new_owner`. Id, `created_at` and grant rows are unchanged.
pub fn transfer_ownership(
    caller: PrincipalId,
    height: BlockHeight,
    id: ContentId,
    new_owner: PrincipalId,
) -> Result<(), RegistryError> {
    let mut record = owned_record(&caller, id)?;
    record.creator = new_owner;
    content::insert_content(&record);

    if let Err(e) = metrics::record_ownership_transfer() {
        log_line!("WARN: metrics not updated for content {}: {}", id, e);
    }
    audit_logs::add_entry(AuditLogEntry {
        height,
        actor: caller,
        action: LogAction::OwnershipTransferred,
        content_id: id,
        details: Some(format!("new_owner={}", new_owner)),
    });
    log_line!("ownership_transferred id={} from={} to={}", id, caller, new_owner);
    Ok(())
}

/// Removes the record permanently. Its id is never handed out again and its
/// permission rows stay behind, unreachable.
pub fn delete_content(caller: PrincipalId, height: BlockHeight, id: ContentId) -> Result<(), RegistryError> {
    let record = owned_record(&caller, id)?;
    content::remove_content(id);

    if let Err(e) = metrics::record_content_deleted(record.size_bytes) {
        log_line!("WARN: metrics not updated for content {}: {}", id, e);
    }
    audit_logs::add_entry(AuditLogEntry {
        height,
        actor: caller,
        action: LogAction::ContentDeleted,
        content_id: id,
        details: None,
    });
    log_line!("content_deleted id={} by={}", id, caller);
    Ok(())
}

/// Returns the full record to its creator or to an explicit grantee.
pub fn fetch_content_details(caller: PrincipalId, id: ContentId) -> Result<ContentRecord, RegistryError> {
    let record = content::get_content(id).ok_or(RegistryError::ContentMissing)?;
    if !permission_service::access_status(&record, &caller).can_access {
        return Err(RegistryError::VisibilityBlocked);
    }
    Ok(record)
}

pub fn fetch_content_owner(id: ContentId) -> Result<PrincipalId, RegistryError> {
    content::get_content(id)
        .map(|record| record.creator)
        .ok_or(RegistryError::ContentMissing)
}

pub fn fetch_vault_statistics() -> VaultStatistics {
    VaultStatistics {
        total_items: content::current_sequence(),
        administrator: config::get_admin_principal(),
    }
}

pub fn check_content_existence(id: ContentId) -> bool {
    content::content_exists(id)
}

/// History of a live item, readable under the same rule as its details.
pub fn get_content_history(caller: PrincipalId, id: ContentId) -> Result<Vec<AuditLogEntry>, RegistryError> {
    fetch_content_details(caller, id)?;
    Ok(audit_logs::get_entries(id))
}
