pub mod accrual;

use crate::config::BillingCycle;
use crate::decimal::{Money, Rate};

pub use accrual::{CycleAccrual, InterestCalculation};

/// trait for per-cycle interest calculations
pub trait InterestCalculator {
    fn calculate_interest(&self, balance: Money, annual_rate: Rate) -> InterestCalculation;

    fn get_daily_rate(&self, annual_rate: Rate) -> Rate;
}

/// interest accrued over one 30 day billing cycle on a 365 day year
///
/// `apr` is the annual rate, so `Rate::from_percentage(18)` for 18%.
/// Negative rates are not rejected here.
pub fn interest_charged(balance: Money, apr: Rate) -> Money {
    CycleAccrual::new(BillingCycle::default())
        .calculate_interest(balance, apr)
        .interest_amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_interest_charged_one_cycle() {
        let interest = interest_charged(Money::from_major(1_000), Rate::from_percentage(12));

        // (0.12 / 365) * 1000 * 30
        assert_eq!(interest.round_dp(6), Money::from_decimal(dec!(9.863014)));
        assert!(interest > Money::from_decimal(dec!(9.863)));
        assert!(interest < Money::from_decimal(dec!(9.864)));
    }

    #[test]
    fn test_zero_apr_accrues_nothing() {
        let interest = interest_charged(Money::from_major(5_000), Rate::ZERO);
        assert!(interest.is_zero());
    }

    #[test]
    fn test_zero_balance_accrues_nothing() {
        let interest = interest_charged(Money::ZERO, Rate::from_percentage(29));
        assert!(interest.is_zero());
    }

    #[test]
    fn test_interest_scales_with_balance() {
        let apr = Rate::from_percentage(18);
        let small = interest_charged(Money::from_major(1_000), apr);
        let large = interest_charged(Money::from_major(2_000), apr);
        assert_eq!((small * dec!(2)).round_dp(6), large.round_dp(6));
    }
}
