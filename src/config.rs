use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{PayoffError, Result};

/// credit line assumed when none is given
pub const DEFAULT_CREDIT_LINE: i64 = 5_000;

/// highest accepted APR, in whole percent
pub const MAX_APR_PERCENT: i64 = 100;

/// account inputs for a single payoff projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTerms {
    pub balance: Money,
    pub apr: Rate,
    pub credit_line: Money,
    pub target_payment: Option<Money>,
    pub fees: Money,
}

impl CardTerms {
    pub fn builder() -> CardTermsBuilder {
        CardTermsBuilder::new()
    }

    /// true when every cycle pays the recomputed minimum
    pub fn pays_minimum(&self) -> bool {
        self.target_payment.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.balance.is_negative() {
            return Err(PayoffError::InvalidBalance { balance: self.balance });
        }
        if self.apr < Rate::ZERO || self.apr > Rate::ONE {
            return Err(PayoffError::InvalidApr {
                apr: self.apr.as_percentage().trunc().to_i64().unwrap_or(i64::MAX),
            });
        }
        if !self.credit_line.is_positive() {
            return Err(PayoffError::InvalidCreditLine { credit_line: self.credit_line });
        }
        if let Some(payment) = self.target_payment {
            if payment.is_negative() {
                return Err(PayoffError::InvalidPayment { payment });
            }
        }
        if self.fees.is_negative() {
            return Err(PayoffError::InvalidFees { fees: self.fees });
        }
        Ok(())
    }
}

/// builder for card terms, mirrors the command line defaults
#[derive(Debug, Clone)]
pub struct CardTermsBuilder {
    balance: Money,
    apr_percent: i64,
    credit_line: Money,
    target_payment: Option<Money>,
    fees: Money,
}

impl CardTermsBuilder {
    pub fn new() -> Self {
        Self {
            balance: Money::ZERO,
            apr_percent: 0,
            credit_line: Money::from_major(DEFAULT_CREDIT_LINE),
            target_payment: None,
            fees: Money::ZERO,
        }
    }

    pub fn balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    /// annual rate in whole percent, e.g. 18
    pub fn apr_percent(mut self, apr: i64) -> Self {
        self.apr_percent = apr;
        self
    }

    pub fn credit_line(mut self, credit_line: Money) -> Self {
        self.credit_line = credit_line;
        self
    }

    pub fn target_payment(mut self, payment: Option<Money>) -> Self {
        self.target_payment = payment;
        self
    }

    pub fn fees(mut self, fees: Money) -> Self {
        self.fees = fees;
        self
    }

    pub fn build(self) -> Result<CardTerms> {
        if !(0..=MAX_APR_PERCENT).contains(&self.apr_percent) {
            return Err(PayoffError::InvalidApr { apr: self.apr_percent });
        }

        let terms = CardTerms {
            balance: self.balance,
            apr: Rate::from_percentage(self.apr_percent as u32),
            credit_line: self.credit_line,
            target_payment: self.target_payment,
            fees: self.fees,
        };
        terms.validate()?;
        Ok(terms)
    }
}

impl Default for CardTermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// minimum payment rule: percentage of balance plus fees, with a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumPaymentPolicy {
    pub balance_percentage: Decimal,
    pub floor: Money,
}

impl Default for MinimumPaymentPolicy {
    fn default() -> Self {
        Self {
            balance_percentage: dec!(0.02),
            floor: Money::from_major(25),
        }
    }
}

/// billing cycle length and the year basis used to derive the daily rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingCycle {
    pub days: u32,
    pub year_basis: u32,
}

impl Default for BillingCycle {
    fn default() -> Self {
        Self {
            days: 30,
            year_basis: 365,
        }
    }
}

/// optional bound on the payoff loop; unbounded unless a cap is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationLimits {
    pub max_cycles: Option<u32>,
}

impl SimulationLimits {
    pub fn validate(&self) -> Result<()> {
        if self.max_cycles == Some(0) {
            return Err(PayoffError::InvalidConfiguration {
                message: "max cycles must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// everything the payoff simulator needs besides the card terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub minimum_payment: MinimumPaymentPolicy,
    pub billing_cycle: BillingCycle,
    pub limits: SimulationLimits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let terms = CardTerms::builder()
            .balance(Money::from_major(1_000))
            .apr_percent(18)
            .build()
            .unwrap();

        assert_eq!(terms.credit_line, Money::from_major(5_000));
        assert_eq!(terms.fees, Money::ZERO);
        assert_eq!(terms.apr, Rate::from_percentage(18));
        assert!(terms.pays_minimum());
    }

    #[test]
    fn test_apr_out_of_range() {
        let err = CardTerms::builder().apr_percent(101).build().unwrap_err();
        assert_eq!(err, PayoffError::InvalidApr { apr: 101 });
        assert_eq!(err.to_string(), "APR must be between 0 and 100");

        let err = CardTerms::builder().apr_percent(-1).build().unwrap_err();
        assert_eq!(err, PayoffError::InvalidApr { apr: -1 });

        assert!(CardTerms::builder().apr_percent(0).build().is_ok());
        assert!(CardTerms::builder().apr_percent(100).build().is_ok());
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let err = CardTerms::builder().balance(Money::from_major(-1)).build().unwrap_err();
        assert_eq!(err.to_string(), "balance amount must be positive");

        let err = CardTerms::builder().fees(Money::from_major(-5)).build().unwrap_err();
        assert_eq!(err.to_string(), "fees must be positive");

        let err = CardTerms::builder()
            .target_payment(Some(Money::from_major(-10)))
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "payment amount must be positive");
    }

    #[test]
    fn test_zero_balance_and_zero_payment_allowed() {
        let terms = CardTerms::builder()
            .balance(Money::ZERO)
            .target_payment(Some(Money::ZERO))
            .build()
            .unwrap();
        assert!(!terms.pays_minimum());
    }

    #[test]
    fn test_credit_line_must_be_positive() {
        let err = CardTerms::builder().credit_line(Money::ZERO).build().unwrap_err();
        assert_eq!(err.to_string(), "credit line must be positive");
    }

    #[test]
    fn test_simulation_limits() {
        assert_eq!(SimulationLimits::default().max_cycles, None);
        assert!(SimulationLimits::default().validate().is_ok());
        assert!(SimulationLimits { max_cycles: Some(12) }.validate().is_ok());
        assert!(SimulationLimits { max_cycles: Some(0) }.validate().is_err());
    }

    #[test]
    fn test_terms_json_shape() {
        let terms = CardTerms::builder()
            .balance(Money::from_major(100))
            .apr_percent(12)
            .target_payment(Some(Money::from_major(50)))
            .build()
            .unwrap();

        let value = serde_json::to_value(&terms).unwrap();
        assert_eq!(value["balance"], "100");
        assert_eq!(value["target_payment"], "50");
        assert_eq!(value["credit_line"], "5000");
    }
}
