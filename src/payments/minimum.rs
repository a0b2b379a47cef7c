use crate::config::MinimumPaymentPolicy;
use crate::decimal::Money;

impl MinimumPaymentPolicy {
    /// percentage of the balance plus fees, never below the floor
    pub fn minimum_for(&self, balance: Money, fees: Money) -> Money {
        let computed = balance * self.balance_percentage + fees;
        computed.max(self.floor)
    }
}

/// minimum payment due: `max(0.02 * balance + fees, 25)`
pub fn get_min_payment(balance: Money, fees: Money) -> Money {
    MinimumPaymentPolicy::default().minimum_for(balance, fees)
}
