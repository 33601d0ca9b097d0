// src/backend/metrics.rs
use crate::models::common::StorageBytes;
use crate::storage::{get_metrics, update_metrics};
use candid::{CandidType, Deserialize};
use serde::Serialize;

#[derive(CandidType, Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryMetrics {
    pub live_items: u64,
    pub total_created: u64,
    pub total_deleted: u64,
    pub ownership_transfers: u64,
    /// Sum of `size_bytes` over live items.
    pub stored_bytes: StorageBytes,
}

// --- Metrics Update Helpers ---

pub fn record_content_created(size_bytes: StorageBytes) -> Result<(), String> {
    update_metrics(|metrics| {
        metrics.live_items = metrics.live_items.saturating_add(1);
        metrics.total_created = metrics.total_created.saturating_add(1);
        metrics.stored_bytes = metrics.stored_bytes.saturating_add(size_bytes);
    })
}

pub fn record_content_deleted(size_bytes: StorageBytes) -> Result<(), String> {
    update_metrics(|metrics| {
        metrics.live_items = metrics.live_items.saturating_sub(1);
        metrics.total_deleted = metrics.total_deleted.saturating_add(1);
        metrics.stored_bytes = metrics.stored_bytes.saturating_sub(size_bytes);
    })
}

pub fn record_ownership_transfer() -> Result<(), String> {
    update_metrics(|metrics| {
        metrics.ownership_transfers = metrics.ownership_transfers.saturating_add(1);
    })
}

pub fn get_registry_metrics() -> RegistryMetrics {
    get_metrics()
}
