// src/backend/storage/config.rs
use crate::models::{Cycles, PrincipalId};
use crate::storage::memory::{get_admin_principal_memory, get_min_cycles_threshold_memory, Memory};
use crate::storage::storable::Cbor;
use candid::Principal;
use ic_stable_structures::StableCell;
use std::cell::RefCell;

// Used only until `init_config` runs.
const DEFAULT_ADMIN_PRINCIPAL: Principal = Principal::anonymous();
pub const DEFAULT_MIN_CYCLES_THRESHOLD: Cycles = 10_000_000_000; // 10B cycles

thread_local! {
    /// Administrator captured at deployment. Never rewritten afterwards.
    static ADMIN_PRINCIPAL: RefCell<StableCell<Cbor<Principal>, Memory>> = RefCell::new(
        StableCell::init(get_admin_principal_memory(), Cbor(DEFAULT_ADMIN_PRINCIPAL))
            .expect("Failed to initialize admin principal stable cell")
    );

    static MIN_CYCLES_THRESHOLD: RefCell<StableCell<Cycles, Memory>> = RefCell::new(
        StableCell::init(get_min_cycles_threshold_memory(), DEFAULT_MIN_CYCLES_THRESHOLD)
            .expect("Failed to initialize min cycles threshold stable cell")
    );
}

/// Stores the deployment configuration. Called only from canister `init`.
pub fn init_config(admin: PrincipalId, threshold: Cycles) -> Result<(), String> {
    ADMIN_PRINCIPAL.with(|cell| {
        cell.borrow_mut()
            .set(Cbor(admin))
            .map_err(|e| format!("Failed to set admin principal: {:?}", e))
    })?;
    MIN_CYCLES_THRESHOLD.with(|cell| {
        cell.borrow_mut()
            .set(threshold)
            .map_err(|e| format!("Failed to set min cycles threshold: {:?}", e))
    })?;
    Ok(())
}

pub fn get_admin_principal() -> PrincipalId {
    ADMIN_PRINCIPAL.with(|cell| cell.borrow().get().0)
}

pub fn get_min_cycles_threshold() -> Cycles {
    MIN_CYCLES_THRESHOLD.with(|cell| *cell.borrow().get())
}
