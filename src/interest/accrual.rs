use rust_decimal::Decimal;

use crate::config::BillingCycle;
use crate::decimal::{Money, Rate};
use crate::interest::InterestCalculator;

/// interest calculation result for one billing cycle
#[derive(Debug, Clone, PartialEq)]
pub struct InterestCalculation {
    pub interest_amount: Money,
    pub daily_rate: Rate,
    pub days: u32,
    pub principal_base: Money,
}

/// simple (non-compounding) interest over a fixed-length billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleAccrual {
    pub cycle: BillingCycle,
}

impl CycleAccrual {
    pub fn new(cycle: BillingCycle) -> Self {
        Self { cycle }
    }

    /// interest on `balance` for `days` days at a daily rate of apr / year basis
    pub fn calculate_simple_interest(&self, balance: Money, annual_rate: Rate, days: u32) -> Money {
        let daily_rate = annual_rate.as_decimal() / Decimal::from(self.cycle.year_basis);
        let interest = daily_rate * balance.as_decimal() * Decimal::from(days);
        Money::from_decimal(interest)
    }
}

impl Default for CycleAccrual {
    fn default() -> Self {
        Self::new(BillingCycle::default())
    }
}

impl InterestCalculator for CycleAccrual {
    fn calculate_interest(&self, balance: Money, annual_rate: Rate) -> InterestCalculation {
        InterestCalculation {
            interest_amount: self.calculate_simple_interest(balance, annual_rate, self.cycle.days),
            daily_rate: self.get_daily_rate(annual_rate),
            days: self.cycle.days,
            principal_base: balance,
        }
    }

    fn get_daily_rate(&self, annual_rate: Rate) -> Rate {
        annual_rate.periodic_rate(self.cycle.year_basis)
    }
}
