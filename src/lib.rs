//! # contract-odds: Black-Scholes Pricing for Yes/No Contracts
//!
//! `contract-odds` prices a European call and put with the Black-Scholes closed form
//! and turns the pair into a favourable-side split of a fixed-value yes/no contract,
//! where "yes" tracks the call and "no" tracks the put.
//!
//! ## Core Features
//!
//! - **Option Pricing**: closed-form Black-Scholes for calls and puts, normal CDF via `erf`
//! - **Contract Split**: percentage split of the two values and the matching contract prices
//! - **Scenario Config**: TOML-loadable inputs with the illustrative run as default
//!
//! ## Quick Start
//!
//! ```rust
//! use contract_odds::{price_scenario, Favourable, ScenarioConfig};
//!
//! let report = price_scenario(&ScenarioConfig::illustrative());
//!
//! assert!((report.call_value - 7.51).abs() < 1e-2);
//! assert!((report.put_value - 7.63).abs() < 1e-2);
//! assert_eq!(report.allocation.side, Favourable::No);
//! print!("{report}");
//! ```
//!
//! ## Numeric Domain
//!
//! Inputs are not validated. Zero time-to-expiration or zero volatility divides by
//! zero and the resulting infinities/NaNs propagate into the report unchanged.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod allocation;
pub mod error;
pub mod models;
pub mod scenario;
pub mod telemetry;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use allocation::{split_contract, Allocation, Favourable};
pub use error::{PricingError, PricingResult};
pub use models::bs::{black_scholes_price, bs_call_price, bs_put_price, price_option_tag};
pub use models::{MarketParams, OptionType};
pub use scenario::{ScenarioConfig, ScenarioReport};

use tracing::info;

/// Price both variants for a scenario and split the contract between them.
///
/// # Pricing Methodology
///
/// 1. **Call and put values**: Black-Scholes with the scenario's market inputs
/// 2. **Favourable side**: the larger value wins; ties go to the put ("no") side
/// 3. **Split**: `x` = smaller value as a percentage of the larger, `y = 100 - x`
/// 4. **Contract prices**: favourable side gets `x%` of `contract_max_price`, the other `y%`
///
/// # Example
///
/// ```rust
/// use contract_odds::{price_scenario, ScenarioConfig};
///
/// let config = ScenarioConfig {
///     spot: 110.0,
///     ..ScenarioConfig::illustrative()
/// };
/// let report = price_scenario(&config);
/// let a = report.allocation;
///
/// assert!((a.x + a.y - 100.0).abs() < 1e-9);
/// assert!((a.yes_price + a.no_price - config.contract_max_price).abs() < 1e-9);
/// ```
pub fn price_scenario(config: &ScenarioConfig) -> ScenarioReport {
    let params = config.market_params();

    let call_value = black_scholes_price(&params, OptionType::Call);
    let put_value = black_scholes_price(&params, OptionType::Put);
    let allocation = split_contract(call_value, put_value, config.contract_max_price);

    info!(
        call_value,
        put_value,
        side = allocation.side.label(),
        "scenario priced"
    );

    ScenarioReport {
        call_value,
        put_value,
        allocation,
    }
}
