//! Console logging setup.
//!
//! The library itself only emits `tracing` events; it never installs a
//! subscriber. Shells and integration tests call [`init_logging`] once
//! at startup to see them.

use tracing_subscriber::{EnvFilter, fmt};

/// Initializes compact console logging with an env-filter.
///
/// `RUST_LOG` overrides the default filter. Safe to call more than
/// once; installing over an existing subscriber is a quiet no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,slateport_session=info,slateport_store=info,reqwest=warn",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
