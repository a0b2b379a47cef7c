use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;

/// credit line utilization thresholds tracked during a payoff projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UtilizationThreshold {
    Quarter,       // 25%
    Half,          // 50%
    ThreeQuarters, // 75%
}

impl UtilizationThreshold {
    pub const ALL: [UtilizationThreshold; 3] = [
        UtilizationThreshold::Quarter,
        UtilizationThreshold::Half,
        UtilizationThreshold::ThreeQuarters,
    ];

    pub fn ratio(&self) -> Decimal {
        match self {
            UtilizationThreshold::Quarter => dec!(0.25),
            UtilizationThreshold::Half => dec!(0.50),
            UtilizationThreshold::ThreeQuarters => dec!(0.75),
        }
    }

    /// balance level for this threshold on the given credit line
    pub fn limit(&self, credit_line: Money) -> Money {
        credit_line.portion(self.ratio())
    }

    /// strictly above the threshold; sitting exactly on it does not count
    pub fn is_exceeded_by(&self, balance: Money, credit_line: Money) -> bool {
        balance > self.limit(credit_line)
    }

    /// highest threshold the balance is above, if any
    pub fn highest_exceeded(balance: Money, credit_line: Money) -> Option<UtilizationThreshold> {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|t| t.is_exceeded_by(balance, credit_line))
    }
}

impl fmt::Display for UtilizationThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UtilizationThreshold::Quarter => "25%",
            UtilizationThreshold::Half => "50%",
            UtilizationThreshold::ThreeQuarters => "75%",
        };
        write!(f, "{}", label)
    }
}
