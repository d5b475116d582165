use crate::models::types::MarketParams;

#[cfg(feature = "serde")]
use crate::error::{PricingError, PricingResult};

/// Inputs for one pricing-and-split run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_spot"))]
    pub spot: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_strike"))]
    pub strike: f64,

    /// Risk-free rate (decimal)
    #[cfg_attr(feature = "serde", serde(default = "default_rate"))]
    pub rate: f64,

    /// Time to expiration in years
    #[cfg_attr(feature = "serde", serde(default = "default_years_to_exp"))]
    pub years_to_exp: f64,

    /// Annualized volatility (decimal)
    #[cfg_attr(feature = "serde", serde(default = "default_volatility"))]
    pub volatility: f64,

    /// Total value shared between the yes and no sides of the contract
    #[cfg_attr(feature = "serde", serde(default = "default_contract_max_price"))]
    pub contract_max_price: f64,

    /// tracing filter directive for stderr logs (e.g. "warn", "contract_odds=debug")
    #[cfg_attr(feature = "serde", serde(default = "default_log_level"))]
    pub log_level: String,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            rate: default_rate(),
            years_to_exp: default_years_to_exp(),
            volatility: default_volatility(),
            contract_max_price: default_contract_max_price(),
            log_level: default_log_level(),
        }
    }
}

impl ScenarioConfig {
    /// The fixed illustrative scenario run by the binary:
    /// spot 95, strike 100, 5% rate, one year, 20% vol, contract max 10.
    pub fn illustrative() -> Self {
        Self::default()
    }

    pub fn market_params(&self) -> MarketParams {
        MarketParams::new(
            self.spot,
            self.strike,
            self.rate,
            self.years_to_exp,
            self.volatility,
        )
    }

    /// Parse a scenario from TOML. Missing keys fall back to the illustrative values.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> PricingResult<Self> {
        toml::from_str(s).map_err(|e| PricingError::config(e.to_string()))
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario file {}", path.display()))?;
        Ok(Self::from_toml_str(&raw)?)
    }
}

fn default_spot() -> f64 {
    95.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_years_to_exp() -> f64 {
    1.0
}

fn default_volatility() -> f64 {
    0.20
}

fn default_contract_max_price() -> f64 {
    10.0
}

fn default_log_level() -> String {
    "warn".to_string()
}
