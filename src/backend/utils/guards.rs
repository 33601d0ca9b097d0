// src/backend/utils/guards.rs
use crate::error::RegistryError;
use crate::storage::config::get_min_cycles_threshold;
use ic_cdk::api::canister_balance128;

/// Checks if the canister has sufficient cycles.
///
/// # Errors
///
/// Returns `RegistryError::CycleLow` if the balance is below the configured threshold.
pub fn check_cycles() -> Result<(), RegistryError> {
    let balance = canister_balance128();
    let threshold = get_min_cycles_threshold();
    if balance < threshold {
        crate::log_line!(
            "Cycle balance low: {} cycles, threshold: {}",
            balance,
            threshold
        );
        Err(RegistryError::CycleLow)
    } else {
        Ok(())
    }
}
