// src/backend/storage/permissions.rs
use crate::models::{ContentId, PrincipalId};
use crate::storage::memory::{get_permissions_memory, Memory};
#[cfg(test)]
use candid::Principal;
use ic_stable_structures::StableBTreeMap;
use std::cell::RefCell;

thread_local! {
    /// Explicit grants: Key = (ContentId, PrincipalId), Value = granted flag.
    /// Rows are never removed, so they may outlive their content item.
    static PERMISSIONS: RefCell<StableBTreeMap<(ContentId, PrincipalId), bool, Memory>> = RefCell::new(
        StableBTreeMap::init(get_permissions_memory())
    );
}

/// Records a grant flag for a (content, user) pair.
pub fn set_permission(content_id: ContentId, user: PrincipalId, granted: bool) {
    PERMISSIONS.with(|map_ref| {
        map_ref.borrow_mut().insert((content_id, user), granted);
    });
}

/// Explicit grant lookup. Missing rows read as not granted.
pub fn has_permission(content_id: ContentId, user: &PrincipalId) -> bool {
    PERMISSIONS.with(|map_ref| {
        map_ref.borrow()
            .get(&(content_id, *user))
            .unwrap_or(false)
    })
}

/// Counts stored rows for one content item, orphaned ones included.
#[cfg(test)]
pub fn count_permissions(content_id: ContentId) -> usize {
    // Principals order by length first, so the empty principal is the lowest
    // and a full-length 0xff principal the highest.
    let range_start = (content_id, Principal::management_canister());
    let range_end = (content_id, Principal::from_slice(&[u8::MAX; Principal::MAX_LENGTH_IN_BYTES]));
    PERMISSIONS.with(|map_ref| {
        map_ref.borrow().range(range_start..=range_end).count()
    })
}

#[cfg(test)]
pub fn reset() {
    PERMISSIONS.with(|map_ref| {
        *map_ref.borrow_mut() = StableBTreeMap::new(get_permissions_memory());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_scoped_to_their_content_item() {
        reset();
        let short = Principal::from_slice(&[9]);
        let long = Principal::from_slice(&[1; 29]);
        set_permission(1, long, true);
        set_permission(1, short, true);
        set_permission(2, short, true);
        set_permission(0, long, true);

        assert_eq!(count_permissions(1), 2);
        assert_eq!(count_permissions(2), 1);
        assert_eq!(count_permissions(3), 0);
        assert!(has_permission(1, &long));
        assert!(!has_permission(2, &long));
    }
}
