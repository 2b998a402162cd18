//! Process-wide tracing/logging setup for binaries and test harnesses that
//! embed the marketplace domain crates.

pub mod subscriber;

pub use subscriber::{LOG_FORMAT_VAR, LogFormat};

/// Initialize tracing/logging from the environment (`RUST_LOG`,
/// `MARKETPLACE_LOG_FORMAT`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    subscriber::init(LogFormat::from_env());
}
