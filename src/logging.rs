use std::sync::Once;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: Once = Once::new();

/// Initializes logging to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Repeated calls are treated as no-ops once initialization succeeds.
pub fn init_logging() -> Result<()> {
    let mut init_result = Ok(());

    LOGGING_INIT.call_once(|| {
        init_result = tracing_subscriber::fmt()
            .with_env_filter(default_env_filter())
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|error| anyhow!("failed to initialize logging: {}", error));
    });

    init_result
}

fn default_env_filter() -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn"),
    }
}

#[cfg(test)]
mod tests {
    use super::init_logging;

    #[test]
    fn init_logging_is_idempotent() {
        assert!(init_logging().is_ok());
        assert!(init_logging().is_ok());
    }
}
