//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jotlist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("jotlist_core ping={}", jotlist_core::ping());
    println!("jotlist_core version={}", jotlist_core::core_version());
}
