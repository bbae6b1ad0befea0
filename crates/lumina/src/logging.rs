//! Process-wide log initialization.

use lumina_error::{ConfigError, LuminaResult};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Level filtering follows the `RUST_LOG` environment variable. Call once
/// at startup.
///
/// # Errors
///
/// Returns a [`ConfigError`](lumina_error::ConfigError) when a global
/// subscriber is already installed.
pub fn init_logging() -> LuminaResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(|e| ConfigError::new(e.to_string()))?;
    Ok(())
}
