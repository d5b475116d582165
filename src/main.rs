//! contract-odds CLI
//!
//! Runs the fixed illustrative scenario and prints the four-line report.

use std::io::Write;

use anyhow::Result;
use contract_odds::{price_scenario, telemetry, ScenarioConfig};

fn main() -> Result<()> {
    let config = ScenarioConfig::illustrative();
    telemetry::init(&config.log_level)?;

    let report = price_scenario(&config);

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{report}")?;
    stdout.flush()?;
    Ok(())
}
