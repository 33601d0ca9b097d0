// src/backend/api.rs
// Candid endpoints. Reads caller and time from the host, then hands off to services.

use crate::{
    error::RegistryError,
    metrics::{self, RegistryMetrics},
    models::{
        audit_log::AuditLogEntry, ContentId, ContentRecord, Cycles, NewContent, PermissionStatus,
        PrincipalId, VaultStatistics,
    },
    services::{content_service, permission_service},
    utils::{guards::check_cycles, time::current_height},
};
use candid::{CandidType, Deserialize};
use ic_cdk::caller;
use ic_cdk_macros::{query, update};
use serde::Serialize;

// --- Request/Response Structs ---

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct TransferOwnershipRequest {
    pub content_id: ContentId,
    pub new_owner: PrincipalId,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, Default)]
pub struct GetMetricsResponse {
    pub metrics: RegistryMetrics,
    pub cycle_balance: Cycles,
}

// --- Content Registry Endpoints ---

#[update]
fn create_content(req: NewContent) -> Result<ContentId, RegistryError> {
    check_cycles()?;
    content_service::create_content(caller(), current_height(), req)
}

#[update]
fn transfer_ownership(req: TransferOwnershipRequest) -> Result<(), RegistryError> {
    check_cycles()?;
    content_service::transfer_ownership(caller(), current_height(), req.content_id, req.new_owner)
}

#[update]
fn delete_content(content_id: ContentId) -> Result<(), RegistryError> {
    check_cycles()?;
    content_service::delete_content(caller(), current_height(), content_id)
}

#[query]
fn fetch_content_details(content_id: ContentId) -> Result<ContentRecord, RegistryError> {
    content_service::fetch_content_details(caller(), content_id)
}

#[query]
fn fetch_content_owner(content_id: ContentId) -> Result<PrincipalId, RegistryError> {
    content_service::fetch_content_owner(content_id)
}

#[query]
fn fetch_vault_statistics() -> VaultStatistics {
    content_service::fetch_vault_statistics()
}

#[query]
fn check_content_existence(content_id: ContentId) -> bool {
    content_service::check_content_existence(content_id)
}

#[query]
fn get_content_history(content_id: ContentId) -> Result<Vec<AuditLogEntry>, RegistryError> {
    content_service::get_content_history(caller(), content_id)
}

// --- Permission Store Endpoints ---

#[query]
fn verify_user_permissions(content_id: ContentId, user: PrincipalId) -> Result<PermissionStatus, RegistryError> {
    permission_service::verify_user_permissions(content_id, user)
}

// --- Metrics ---

#[query]
fn get_metrics() -> GetMetricsResponse {
    GetMetricsResponse {
        metrics: metrics::get_registry_metrics(),
        cycle_balance: ic_cdk::api::canister_balance128(),
    }
}
