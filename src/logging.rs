use crate::error::{ProbeError, Result};
use tracing_subscriber::EnvFilter;

/// Console tracing on stderr so stdout stays clean for payload output
pub fn init_tracing(level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_from_default_env())
        .map_err(|e| ProbeError::Logging(e.to_string()))?;

    // A subscriber may already be installed (tests, embedding)
    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global tracing subscriber already initialized, skipping");
    }

    Ok(())
}
