// src/backend/models/init.rs
use crate::models::common::Cycles;
use candid::{CandidType, Principal};
use serde::Deserialize;

/// Optional deployment arguments. Unset fields fall back to the deploying
/// principal and the default cycles threshold.
#[derive(CandidType, Deserialize, Debug, Default)]
pub struct InitArgs {
    pub admin: Option<Principal>,
    pub min_cycles_threshold: Option<Cycles>,
}
