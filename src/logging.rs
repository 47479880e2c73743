//! Logger installation for hosts that want diagnostics.
//!
//! A loaded library must not take over the host's logging on its own, so nothing is installed
//! until the host asks for it.

use log::debug;

/// Installs `env_logger`, configured from `RUST_LOG`.
///
/// Returns `false` when a logger was already installed, by this crate or anyone else.
pub fn init() -> bool {
    let installed = env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .try_init()
        .is_ok();
    if installed {
        debug!("Logger installed");
    }
    installed
}
