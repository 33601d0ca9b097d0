use crate::models::audit_log::AuditLogEntry;
use crate::models::ContentId;
use crate::storage::memory::{get_audit_log_memory, Memory};
use crate::storage::storable::Cbor;
use ic_stable_structures::StableBTreeMap;
use std::cell::RefCell;

type StorableAuditLogVec = Cbor<Vec<AuditLogEntry>>;

/// Entries kept per content item. Older entries are dropped first, which keeps
/// each append and read within a fixed encoding cost.
pub const MAX_HISTORY_ENTRIES: usize = 64;

thread_local! {
    /// Audit Logs: Key = ContentId, Value = entries in commit order.
    /// Kept after the content item is deleted.
    static LOGS: RefCell<StableBTreeMap<ContentId, StorableAuditLogVec, Memory>> = RefCell::new(
        StableBTreeMap::init(get_audit_log_memory())
    );
}

/// Appends an entry to the history of `entry.content_id`, evicting the
/// oldest entries beyond `MAX_HISTORY_ENTRIES`.
pub fn add_entry(entry: AuditLogEntry) {
    LOGS.with(|map_ref| {
        let mut map = map_ref.borrow_mut();
        let key = entry.content_id;
        let mut entries = map.get(&key).map(|cbor| cbor.0).unwrap_or_default();
        entries.push(entry);
        if entries.len() > MAX_HISTORY_ENTRIES {
            let overflow = entries.len() - MAX_HISTORY_ENTRIES;
            entries.drain(..overflow);
        }
        map.insert(key, Cbor(entries));
    });
}

pub fn get_entries(content_id: ContentId) -> Vec<AuditLogEntry> {
    LOGS.with(|map_ref| {
        map_ref.borrow()
            .get(&content_id)
            .map(|cbor| cbor.0)
            .unwrap_or_default()
    })
}

#[cfg(test)]
pub fn reset() {
    LOGS.with(|map_ref| {
        *map_ref.borrow_mut() = StableBTreeMap::new(get_audit_log_memory());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audit_log::LogAction;
    use candid::Principal;

    fn transfer_at(height: u64) -> AuditLogEntry {
        AuditLogEntry {
            height,
            actor: Principal::from_slice(&[1]),
            action: LogAction::OwnershipTransferred,
            content_id: 1,
            details: None,
        }
    }

    #[test]
    fn history_keeps_only_the_newest_entries() {
        reset();
        let total = MAX_HISTORY_ENTRIES as u64 + 10;
        for height in 0..total {
            add_entry(transfer_at(height));
        }

        let entries = get_entries(1);
        assert_eq!(entries.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(entries.first().map(|e| e.height), Some(10));
        assert_eq!(entries.last().map(|e| e.height), Some(total - 1));
        assert!(get_entries(2).is_empty());
    }
}
