//! Test setup helpers for the confmap workspace.

#![warn(missing_docs)]

/// Installs a logger for tests.
///
/// Safe to call from every test; only the first call in a process installs
/// the logger. Log output is captured per test and shown on failure. Set
/// `RUST_LOG` to adjust verbosity (everything at `trace` by default).
pub fn setup() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .try_init();
}
