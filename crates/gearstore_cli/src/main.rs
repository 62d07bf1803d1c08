//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gearstore_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("gearstore_core ping={}", gearstore_core::ping());
    println!("gearstore_core version={}", gearstore_core::core_version());
}
