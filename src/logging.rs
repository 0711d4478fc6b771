//! Tracing setup for Smart Budget
//!
//! Log output goes to stderr so that reports printed on stdout stay
//! pipeable. `RUST_LOG` takes precedence over the verbosity flag.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Map the `-v` count of the CLI to a default filter directive
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "smart_budget=warn",
        1 => "smart_budget=info",
        _ => "smart_budget=debug",
    }
}

/// Initialize the global tracing subscriber. Safe to call more than once.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
