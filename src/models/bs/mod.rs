// Black-Scholes pricing for European calls and puts. The normal CDF goes through
// the erf identity rather than a distribution object, and no domain guards are
// applied: degenerate T or sigma yields inf/NaN.

use tracing::{debug, warn};

use crate::error::PricingResult;
use crate::models::types::{MarketParams, OptionType};

/// Standard normal CDF: 0.5 * [1 + erf(x / sqrt(2))]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Complementary form 0.5 * [1 - erf(x / sqrt(2))], i.e. N(-x)
fn norm_cdf_neg(x: f64) -> f64 {
    0.5 * (1.0 - libm::erf(x / std::f64::consts::SQRT_2))
}

/// Black-Scholes d1 and d2.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    (d1, d2)
}

/// Call value from precomputed d1/d2 and discount factor.
#[allow(non_snake_case)]
fn call_from_d(S: f64, K: f64, df: f64, d1: f64, d2: f64) -> f64 {
    S * norm_cdf(d1) - K * df * norm_cdf(d2)
}

/// Put value from precomputed d1/d2 and discount factor.
#[allow(non_snake_case)]
fn put_from_d(S: f64, K: f64, df: f64, d1: f64, d2: f64) -> f64 {
    K * df * norm_cdf_neg(d2) - S * norm_cdf_neg(d1)
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    call_from_d(S, K, (-r * T).exp(), d1, d2)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    put_from_d(S, K, (-r * T).exp(), d1, d2)
}

/// Black-Scholes theoretical value for the given variant.
pub fn black_scholes_price(params: &MarketParams, option_type: OptionType) -> f64 {
    let MarketParams {
        spot,
        strike,
        rate,
        years_to_exp,
        volatility,
    } = *params;

    let (d1, d2) = d1_d2(spot, strike, rate, years_to_exp, volatility);
    debug!(%option_type, d1, d2, "black-scholes inputs");

    let df = params.discount_factor();
    let price = match option_type {
        OptionType::Call => call_from_d(spot, strike, df, d1, d2),
        OptionType::Put => put_from_d(spot, strike, df, d1, d2),
    };

    if !price.is_finite() {
        warn!(%option_type, ?params, price, "non-finite option value");
    }
    price
}

/// Price from a textual variant tag ("call" / "put", case-insensitive).
///
/// Unknown tags return [`PricingError::InvalidOptionVariant`](crate::PricingError).
pub fn price_option_tag(tag: &str, params: &MarketParams) -> PricingResult<f64> {
    let option_type: OptionType = tag.parse()?;
    Ok(black_scholes_price(params, option_type))
}
