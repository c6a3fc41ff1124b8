use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`. Fails instead of panicking
/// when a subscriber is already installed.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    Ok(())
}
