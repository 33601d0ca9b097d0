// src/backend/models/common.rs
use candid::Principal;

pub type ContentId = u64;         // Sequential identifier, starts at 1, never reused
pub type PrincipalId = Principal; // Caller, creator or grantee identity
pub type BlockHeight = u64;       // Host-supplied non-decreasing sequence value
pub type StorageBytes = u64;
pub type Cycles = u128;

// Per-label character bound; the remaining bounds live on `NewContent`.
pub const LABEL_MAX_CHARS: usize = 32;
