use tracing::debug;

use super::types::{Allocation, Favourable};

/// Split a fixed contract value between the call ("yes") and put ("no") sides.
///
/// The larger of the two option values is the favourable side. `x` is the
/// smaller value as a percentage of the larger, `y = 100 - x`. The favourable
/// side is priced at `x%` of `contract_max_price` and the other side at `y%`.
///
/// Zero or non-finite inputs are not trapped: a zero divisor yields inf/NaN
/// percentages, and a NaN comparison falls through to [`Favourable::No`].
pub fn split_contract(call_value: f64, put_value: f64, contract_max_price: f64) -> Allocation {
    let allocation = if call_value > put_value {
        let x = put_value * 100.0 / call_value;
        let y = 100.0 - x;
        Allocation {
            side: Favourable::Yes,
            x,
            y,
            yes_price: y * contract_max_price / 100.0,
            no_price: x * contract_max_price / 100.0,
        }
    } else {
        let x = call_value * 100.0 / put_value;
        let y = 100.0 - x;
        Allocation {
            side: Favourable::No,
            x,
            y,
            yes_price: x * contract_max_price / 100.0,
            no_price: y * contract_max_price / 100.0,
        }
    };

    debug!(
        side = allocation.side.label(),
        x = allocation.x,
        y = allocation.y,
        "contract split"
    );
    allocation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_branch_when_call_larger() {
        let a = split_contract(8.0, 2.0, 10.0);
        assert_eq!(a.side, Favourable::Yes);
        assert!((a.x - 25.0).abs() < 1e-12);
        assert!((a.y - 75.0).abs() < 1e-12);
        assert!((a.yes_price - 7.5).abs() < 1e-12);
        assert!((a.no_price - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_branch_when_put_larger() {
        let a = split_contract(2.0, 8.0, 10.0);
        assert_eq!(a.side, Favourable::No);
        assert!((a.x - 25.0).abs() < 1e-12);
        assert!((a.yes_price - 2.5).abs() < 1e-12);
        assert!((a.no_price - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_tie_goes_to_no() {
        let a = split_contract(4.0, 4.0, 10.0);
        assert_eq!(a.side, Favourable::No);
        assert_eq!(a.x, 100.0);
        assert_eq!(a.y, 0.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Favourable::Yes.to_string(), "yesFavourable");
        assert_eq!(Favourable::No.label(), "noFavourable");
    }
}
