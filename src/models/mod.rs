pub mod bs;
pub mod types;

pub use types::{MarketParams, OptionType};
