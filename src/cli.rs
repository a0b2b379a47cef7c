use clap::Parser;

use crate::config::{CardTerms, SimulationConfig, SimulationLimits};
use crate::decimal::Money;
use crate::errors::Result;

/// Project how long it takes to pay off a credit card balance
#[derive(Debug, Clone, Parser)]
#[command(name = "card-payoff", version)]
pub struct Cli {
    /// The total amount of balance left on the credit account
    #[arg(allow_negative_numbers = true)]
    pub balance_amount: Money,

    /// The annual APR, a whole number between 0 and 100
    #[arg(allow_negative_numbers = true)]
    pub apr: i64,

    /// The maximum amount of balance allowed on the credit line
    #[arg(allow_negative_numbers = true)]
    pub credit_line: i64,

    /// The amount to pay each cycle instead of the minimum payment
    #[arg(long, allow_negative_numbers = true)]
    pub payment: Option<i64>,

    /// The fees applied monthly, added to the minimum payment
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub fees: Money,

    /// Stop projecting after this many billing cycles
    #[arg(long)]
    pub max_cycles: Option<u32>,

    /// Print the cycle by cycle breakdown after the summary
    #[arg(long)]
    pub schedule: bool,
}

impl Cli {
    /// validate the arguments into card terms and simulation settings
    pub fn resolve(&self) -> Result<(CardTerms, SimulationConfig)> {
        let terms = CardTerms::builder()
            .balance(self.balance_amount)
            .apr_percent(self.apr)
            .credit_line(Money::from_major(self.credit_line))
            .target_payment(self.payment.map(Money::from_major))
            .fees(self.fees)
            .build()?;

        let limits = SimulationLimits {
            max_cycles: self.max_cycles,
        };
        limits.validate()?;

        let config = SimulationConfig {
            limits,
            ..SimulationConfig::default()
        };
        Ok((terms, config))
    }
}
