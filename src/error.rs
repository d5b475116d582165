//! Error types for contract-odds

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Option variant tag outside {"call", "put"}.
    #[error("Invalid option type '{0}'. Must be either 'call' or 'put'.")]
    InvalidOptionVariant(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid_variant(tag: impl Into<String>) -> Self {
        Self::InvalidOptionVariant(tag.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
