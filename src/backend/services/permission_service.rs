// src/backend/services/permission_service.rs

use crate::{
    error::RegistryError,
    models::{ContentId, ContentRecord, PermissionStatus, PrincipalId},
    storage::{content, permissions},
};

/// Access decision for `user` on an already loaded record.
///
/// Ownership is computed from `record.creator`, so a new owner gains access
/// after a transfer without any permission row being written.
pub fn access_status(record: &ContentRecord, user: &PrincipalId) -> PermissionStatus {
    let has_explicit_permission = permissions::has_permission(record.id, user);
    PermissionStatus::new(has_explicit_permission, record.creator == *user)
}

/// Reports explicit grant, ownership and the combined access flag.
///
/// # Errors
/// * `ContentMissing` - no record with `content_id` exists.
pub fn verify_user_permissions(
    content_id: ContentId,
    user: PrincipalId,
) -> Result<PermissionStatus, RegistryError> {
    let record = content::get_content(content_id).ok_or(RegistryError::ContentMissing)?;
    Ok(access_status(&record, &user))
}

/// Seeds the creator's grant row. The only write path into the store.
pub(crate) fn grant_creator(content_id: ContentId, creator: PrincipalId) {
    permissions::set_permission(content_id, creator, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewContent;
    use crate::services::content_service;
    use crate::storage;
    use candid::Principal;

    fn principal(n: u8) -> Principal {
        Principal::from_slice(&[n])
    }

    fn sample() -> NewContent {
        NewContent {
            title: "Doc".to_string(),
            size_bytes: 100,
            summary: "S".to_string(),
            labels: vec!["a".to_string()],
        }
    }

    #[test]
    fn missing_content_is_reported() {
        storage::reset_for_test();
        assert_eq!(
            verify_user_permissions(1, principal(1)),
            Err(RegistryError::ContentMissing)
        );
    }

    #[test]
    fn creator_holds_explicit_grant_and_ownership() {
        storage::reset_for_test();
        let id = content_service::create_content(principal(1), 5, sample()).unwrap();
        assert_eq!(
            verify_user_permissions(id, principal(1)),
            Ok(PermissionStatus {
                has_explicit_permission: true,
                is_owner: true,
                can_access: true,
            })
        );
    }

    #[test]
    fn stranger_has_nothing() {
        storage::reset_for_test();
        let id = content_service::create_content(principal(1), 5, sample()).unwrap();
        assert_eq!(
            verify_user_permissions(id, principal(2)),
            Ok(PermissionStatus::default())
        );
    }

    #[test]
    fn transfer_moves_ownership_but_not_grants() {
        storage::reset_for_test();
        let id = content_service::create_content(principal(1), 5, sample()).unwrap();
        content_service::transfer_ownership(principal(1), 6, id, principal(2)).unwrap();

        let old_owner = verify_user_permissions(id, principal(1)).unwrap();
        assert_eq!(old_owner, PermissionStatus::new(true, false));
        assert!(old_owner.can_access);

        let new_owner = verify_user_permissions(id, principal(2)).unwrap();
        assert_eq!(new_owner, PermissionStatus::new(false, true));
        assert!(new_owner.can_access);
    }

    #[test]
    fn grant_rows_outlive_deleted_content() {
        storage::reset_for_test();
        let id = content_service::create_content(principal(1), 5, sample()).unwrap();
        content_service::delete_content(principal(1), 6, id).unwrap();

        assert_eq!(permissions::count_permissions(id), 1);
        assert_eq!(
            verify_user_permissions(id, principal(1)),
            Err(RegistryError::ContentMissing)
        );
    }
}
