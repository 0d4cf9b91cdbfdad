// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

/// Install `env_logger` once per test binary; `RUST_LOG` selects the level.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
