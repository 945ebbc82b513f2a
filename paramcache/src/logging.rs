//! Tracing subscriber setup for binaries and Lambda handlers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects between
/// `paramcache=debug,info` and `paramcache=info,warn`. Returns false if a
/// global subscriber was already installed.
pub fn init_tracing(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// Same as [`init_tracing`] but emits JSON lines (CloudWatch friendly).
pub fn init_json_tracing(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
        .is_ok()
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "paramcache=debug,info"
    } else {
        "paramcache=info,warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}

