// src/backend/utils/log.rs

/// Writes one line to the canister debug log. The host print primitive only
/// exists inside a canister, so native builds (unit tests) go to stderr.
#[macro_export]
macro_rules! log_line {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        ic_cdk::println!($($arg)*);
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!($($arg)*);
    }};
}
