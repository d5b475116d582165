//! Favourable-side split of a fixed-value yes/no contract.

pub mod split;
pub mod types;

pub use split::split_contract;
pub use types::{Allocation, Favourable};
