// src/backend/lib.rs

pub mod api;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

use crate::error::RegistryError;
use crate::models::{
    audit_log::AuditLogEntry, init::InitArgs, ContentId, ContentRecord, NewContent, PermissionStatus,
    PrincipalId, VaultStatistics,
};
use crate::api::{GetMetricsResponse, TransferOwnershipRequest};
use crate::storage::config::{init_config, DEFAULT_MIN_CYCLES_THRESHOLD};

#[ic_cdk::init]
fn init(args: Option<InitArgs>) {
    let args = args.unwrap_or_default();
    // The deployer becomes administrator unless one is named explicitly.
    let admin = args.admin.unwrap_or_else(ic_cdk::caller);
    let threshold = args.min_cycles_threshold.unwrap_or(DEFAULT_MIN_CYCLES_THRESHOLD);
    if let Err(e) = init_config(admin, threshold) {
        ic_cdk::trap(&e);
    }
    log_line!("Content vault initialized: admin={}, min_cycles={}", admin, threshold);
}

#[ic_cdk::post_upgrade]
fn post_upgrade() {
    // All state lives in stable memory; configuration is left as deployed.
    log_line!(
        "Content vault upgraded: total_items={}",
        storage::content::current_sequence()
    );
}

// Export Candid interface
ic_cdk::export_candid!();
