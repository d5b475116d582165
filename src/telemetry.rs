//! stderr logging setup.
//!
//! Logs never touch stdout, which carries only the scenario report. The filter
//! directive comes from [`ScenarioConfig::log_level`](crate::ScenarioConfig);
//! no environment variable is consulted.

use anyhow::{anyhow, Result};
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const FALLBACK_FILTER: &str = "warn";

/// Install the global fmt subscriber. Fails if one is already installed.
///
/// An unparsable directive falls back to `warn`; the parse error is logged as a
/// warning through the installed subscriber.
pub fn init(directive: &str) -> Result<()> {
    let (filter, rejected) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_FILTER), Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    if let Some(e) = rejected {
        warn!(directive, error = %e, fallback = FALLBACK_FILTER, "invalid log filter");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_once_with_fallback_filter() {
        let bad = "contract_odds=[unclosed";
        assert!(EnvFilter::try_new(bad).is_err());
        assert!(init(bad).is_ok());
        assert!(init("debug").is_err());
    }
}
