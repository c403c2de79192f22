#![cfg(test)]

//! One-time tracing setup for unit tests.
//!
//! Filter precedence: `TEST_LOG`, then `RUST_LOG`, then `warn`.
//! Output goes through the test writer so `cargo test` captures it per test.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

fn filter_from_env() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Idempotent; safe to call from any test or from a `ctor` hook.
///
/// ```bash
/// TEST_LOG=debug cargo test -p stratego scout
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(filter_from_env())
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
