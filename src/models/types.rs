use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// European option variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::invalid_variant(s)),
        }
    }
}

/// Market inputs for a single Black-Scholes evaluation.
///
/// No range checks are applied: zero time or volatility divides by zero and the
/// resulting infinities/NaNs flow through to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Underlying asset price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Risk-free rate (continuously compounded, decimal)
    pub rate: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Annualized volatility (decimal, e.g. 0.20 for 20%)
    pub volatility: f64,
}

impl MarketParams {
    pub fn new(spot: f64, strike: f64, rate: f64, years_to_exp: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            years_to_exp,
            volatility,
        }
    }

    /// Copy with a different spot, keeping the other inputs fixed
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.years_to_exp).exp()
    }
}
