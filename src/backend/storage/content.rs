// src/backend/storage/content.rs
use crate::error::RegistryError;
use crate::models::{ContentId, ContentRecord};
use crate::storage::memory::{get_content_counter_memory, get_content_items_memory, Memory};
use crate::storage::storable::Cbor;
use ic_stable_structures::{StableBTreeMap, StableCell};
use std::cell::RefCell;

type StorableContent = Cbor<ContentRecord>;

thread_local! {
    /// Last assigned content id. Only moves forward, deletions included.
    static CONTENT_COUNTER: RefCell<StableCell<ContentId, Memory>> = RefCell::new(
        StableCell::init(get_content_counter_memory(), 0)
            .expect("Failed to initialize content counter")
    );

    /// Primary storage: ContentId -> ContentRecord
    static CONTENT_MAP: RefCell<StableBTreeMap<ContentId, StorableContent, Memory>> = RefCell::new(
        StableBTreeMap::init(get_content_items_memory())
    );
}

/// Returns the last assigned content id (0 before the first creation).
pub fn current_sequence() -> ContentId {
    CONTENT_COUNTER.with(|cell| *cell.borrow().get())
}

/// Computes the id the next creation will receive without consuming it.
pub fn peek_next_content_id() -> Result<ContentId, RegistryError> {
    current_sequence()
        .checked_add(1)
        .ok_or_else(|| RegistryError::InternalError("Content counter overflow".to_string()))
}

/// Moves the sequence counter to `id`. Callers pass the value obtained from
/// `peek_next_content_id`.
pub fn advance_sequence(id: ContentId) -> Result<(), RegistryError> {
    CONTENT_COUNTER.with(|cell| {
        cell.borrow_mut()
            .set(id)
            .map(|_previous| ())
            .map_err(|e| RegistryError::InternalError(format!("Failed to update content counter: {:?}", e)))
    })
}

/// Inserts or replaces a content record.
pub fn insert_content(record: &ContentRecord) {
    CONTENT_MAP.with(|map_ref| {
        map_ref.borrow_mut().insert(record.id, Cbor(record.clone()));
    });
}

pub fn get_content(id: ContentId) -> Option<ContentRecord> {
    CONTENT_MAP.with(|map_ref| map_ref.borrow().get(&id).map(|c| c.0))
}

pub fn content_exists(id: ContentId) -> bool {
    CONTENT_MAP.with(|map_ref| map_ref.borrow().contains_key(&id))
}

pub fn remove_content(id: ContentId) -> Option<ContentRecord> {
    CONTENT_MAP.with(|map_ref| map_ref.borrow_mut().remove(&id).map(|c| c.0))
}

#[cfg(test)]
pub fn reset() {
    CONTENT_COUNTER.with(|cell| {
        *cell.borrow_mut() = StableCell::new(get_content_counter_memory(), 0)
            .expect("Failed to reset content counter");
    });
    CONTENT_MAP.with(|map_ref| {
        *map_ref.borrow_mut() = StableBTreeMap::new(get_content_items_memory());
    });
}
