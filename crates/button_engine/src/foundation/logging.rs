//! Logging utilities
//!
//! The engine only ever talks to the `log` facade. Binaries call [`init`] or
//! [`init_with_level`] once at startup to install `env_logger` as the backend.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter
///
/// `RUST_LOG` still wins when it is set, so a user can raise verbosity for a
/// single module without touching the configuration file.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A second initialization (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env).try_init();
}
