// src/backend/storage/memory.rs
use ic_stable_structures::memory_manager::{MemoryId, MemoryManager, VirtualMemory};
use ic_stable_structures::DefaultMemoryImpl;
use std::cell::RefCell;

// One MemoryId per stable structure. Never renumber: ids are part of the
// persisted layout across upgrades.
const CONTENT_COUNTER_MEM_ID: MemoryId = MemoryId::new(0);
const CONTENT_ITEMS_MEM_ID: MemoryId = MemoryId::new(1);
const PERMISSIONS_MEM_ID: MemoryId = MemoryId::new(2);
const AUDIT_LOG_MEM_ID: MemoryId = MemoryId::new(3);
const METRICS_MEM_ID: MemoryId = MemoryId::new(4);
// Reserve IDs 5-19 for future use
const ADMIN_PRINCIPAL_MEM_ID: MemoryId = MemoryId::new(20);
const MIN_CYCLES_THRESHOLD_MEM_ID: MemoryId = MemoryId::new(21);

pub type Memory = VirtualMemory<DefaultMemoryImpl>;

thread_local! {
    static MEMORY_MANAGER: RefCell<MemoryManager<DefaultMemoryImpl>> = RefCell::new(
        MemoryManager::init(DefaultMemoryImpl::default())
    );
}

/// Get memory instance for a specific MemoryId.
pub fn get_memory(id: MemoryId) -> Memory {
    MEMORY_MANAGER.with(|m| m.borrow().get(id))
}

pub fn get_content_counter_memory() -> Memory {
    get_memory(CONTENT_COUNTER_MEM_ID)
}

pub fn get_content_items_memory() -> Memory {
    get_memory(CONTENT_ITEMS_MEM_ID)
}

pub fn get_permissions_memory() -> Memory {
    get_memory(PERMISSIONS_MEM_ID)
}

pub fn get_audit_log_memory() -> Memory {
    get_memory(AUDIT_LOG_MEM_ID)
}

pub fn get_metrics_memory() -> Memory {
    get_memory(METRICS_MEM_ID)
}

pub fn get_admin_principal_memory() -> Memory {
    get_memory(ADMIN_PRINCIPAL_MEM_ID)
}

pub fn get_min_cycles_threshold_memory() -> Memory {
    get_memory(MIN_CYCLES_THRESHOLD_MEM_ID)
}
