//! Platform abstraction layer
//!
//! The simulation and `Session` are host-agnostic. Browser hosts drive them
//! through the wasm-bindgen bridge in `web`; the native binary uses
//! `Session` directly.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for hosts that were not given one
#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Seed for hosts that were not given one
#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    js_sys::Date::now() as u64
}
