//! Tracing setup
//!
//! Diagnostics go to stderr so stdout stays clean for command output.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` does not say otherwise
pub const DEFAULT_DIRECTIVE: &str = "finledger=warn";

/// Initializes the global tracing subscriber
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Ignore failure if another subscriber was installed first
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
    }
}
