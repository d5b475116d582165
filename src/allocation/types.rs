use std::fmt;

/// Which side of the yes/no contract carries the larger option value.
///
/// "Yes" maps to the call, "No" to the put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Favourable {
    Yes,
    No,
}

impl Favourable {
    /// Branch label as printed in the report line
    pub fn label(&self) -> &'static str {
        match self {
            Favourable::Yes => "yesFavourable",
            Favourable::No => "noFavourable",
        }
    }
}

impl fmt::Display for Favourable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage split and contract prices derived from a call/put value pair
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// Side with the larger option value (ties go to `No`)
    pub side: Favourable,
    /// Smaller value as a percentage of the larger one
    pub x: f64,
    /// Complement `100 - x`
    pub y: f64,
    /// Contract price of the call ("yes") side
    pub yes_price: f64,
    /// Contract price of the put ("no") side
    pub no_price: f64,
}
