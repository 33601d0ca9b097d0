// src/backend/storage/mod.rs
// Stable memory containers built on ic-stable-structures

pub mod audit_logs;
pub mod config;
pub mod content;
pub mod memory;
pub mod metrics;
pub mod permissions;
pub mod storable;

pub use memory::Memory;
pub use metrics::{get_metrics, update_metrics};
pub use storable::Cbor;

/// Clears every registry container so a test starts from an empty canister.
#[cfg(test)]
pub fn reset_for_test() {
    content::reset();
    permissions::reset();
    audit_logs::reset();
    metrics::reset();
}
