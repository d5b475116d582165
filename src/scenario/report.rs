use std::fmt;

use crate::allocation::Allocation;

/// Outcome of one scenario run: both option values and the contract split.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioReport {
    pub call_value: f64,
    pub put_value: f64,
    pub allocation: Allocation,
}

/// Renders the four-line console block, each line newline-terminated.
impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.allocation;
        writeln!(f, "The value of the call option is: {:.2}", self.call_value)?;
        writeln!(f, "The value of the put option is: {:.2}", self.put_value)?;
        writeln!(f, "{}: x = {:.2}% y = {:.2}%", a.side, a.x, a.y)?;
        writeln!(
            f,
            "yesPrice = {:.2} noPrice = {:.2}",
            a.yes_price, a.no_price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::split_contract;

    #[test]
    fn test_report_layout() {
        let report = ScenarioReport {
            call_value: 8.0,
            put_value: 2.0,
            allocation: split_contract(8.0, 2.0, 10.0),
        };
        let expected = "The value of the call option is: 8.00\n\
                        The value of the put option is: 2.00\n\
                        yesFavourable: x = 25.00% y = 75.00%\n\
                        yesPrice = 7.50 noPrice = 2.50\n";
        assert_eq!(report.to_string(), expected);
    }
}
