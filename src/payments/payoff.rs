use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{CardTerms, SimulationConfig};
use crate::decimal::{Money, Rate};
use crate::interest::{CycleAccrual, InterestCalculator};
use crate::utilization::UtilizationThreshold;

/// how a payoff projection ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoffOutcome {
    /// balance reached zero or below
    PaidOff,
    /// a payment did not exceed the interest charged for its cycle
    NeverPaidOff,
    /// stopped at an explicit `SimulationLimits::max_cycles` with balance remaining
    CycleLimitReached,
}

/// cycle counts produced by the payoff loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayoffCounters {
    pub total_cycles: u32,
    pub above_quarter: u32,
    pub above_half: u32,
    pub above_three_quarters: u32,
}

impl PayoffCounters {
    /// `(total, above 25%, above 50%, above 75%)`
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (
            self.total_cycles,
            self.above_quarter,
            self.above_half,
            self.above_three_quarters,
        )
    }

    pub fn cycles_above(&self, threshold: UtilizationThreshold) -> u32 {
        match threshold {
            UtilizationThreshold::Quarter => self.above_quarter,
            UtilizationThreshold::Half => self.above_half,
            UtilizationThreshold::ThreeQuarters => self.above_three_quarters,
        }
    }

    /// count one completed cycle ending at `balance`
    fn record_cycle(&mut self, balance: Money, credit_line: Money) {
        if UtilizationThreshold::ThreeQuarters.is_exceeded_by(balance, credit_line) {
            self.above_three_quarters += 1;
        }
        if UtilizationThreshold::Half.is_exceeded_by(balance, credit_line) {
            self.above_half += 1;
        }
        if UtilizationThreshold::Quarter.is_exceeded_by(balance, credit_line) {
            self.above_quarter += 1;
        }
        self.total_cycles += 1;
    }
}

/// one counted billing cycle of the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    pub cycle_number: u32,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub ending_balance: Money,
    pub highest_threshold: Option<UtilizationThreshold>,
}

/// full result of a payoff simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffProjection {
    pub counters: PayoffCounters,
    pub outcome: PayoffOutcome,
    pub cycles: Vec<CycleRecord>,
    pub total_paid: Money,
    pub total_interest: Money,
    pub final_balance: Money,
}

/// runs the month-by-month payoff loop for one card
pub struct PayoffSimulator {
    terms: CardTerms,
    config: SimulationConfig,
    accrual: CycleAccrual,
}

impl PayoffSimulator {
    pub fn new(terms: CardTerms) -> Self {
        Self::with_config(terms, SimulationConfig::default())
    }

    pub fn with_config(terms: CardTerms, config: SimulationConfig) -> Self {
        Self {
            terms,
            accrual: CycleAccrual::new(config.billing_cycle),
            config,
        }
    }

    /// the fixed target, or the minimum recomputed on the current balance
    pub fn payment_for(&self, balance: Money) -> Money {
        match self.terms.target_payment {
            Some(target) => target,
            None => self
                .config
                .minimum_payment
                .minimum_for(balance, self.terms.fees),
        }
    }

    pub fn run(&self) -> PayoffProjection {
        let credit_line = self.terms.credit_line;
        let max_cycles = self.config.limits.max_cycles;

        let mut balance = self.terms.balance;
        let mut counters = PayoffCounters::default();
        let mut cycles = Vec::new();
        let mut total_paid = Money::ZERO;
        let mut total_interest = Money::ZERO;
        let mut outcome = PayoffOutcome::PaidOff;

        info!(
            balance = %balance,
            apr = %self.terms.apr,
            credit_line = %credit_line,
            pays_minimum = self.terms.pays_minimum(),
            "starting payoff projection"
        );

        while balance.is_positive() {
            if let Some(max_cycles) = max_cycles {
                if counters.total_cycles >= max_cycles {
                    warn!(max_cycles, balance = %balance, "cycle limit reached before payoff");
                    outcome = PayoffOutcome::CycleLimitReached;
                    break;
                }
            }

            let payment = self.payment_for(balance);
            let interest = self
                .accrual
                .calculate_interest(balance, self.terms.apr)
                .interest_amount;
            let principal = payment - interest;

            // payment at or below interest never shrinks the balance
            if !principal.is_positive() {
                warn!(
                    payment = %payment,
                    interest = %interest,
                    cycle = counters.total_cycles + 1,
                    "the balance will never be paid off"
                );
                outcome = PayoffOutcome::NeverPaidOff;
                break;
            }

            let ending_balance = balance - principal;
            counters.record_cycle(ending_balance, credit_line);
            total_paid += payment;
            total_interest += interest;

            debug!(
                cycle = counters.total_cycles,
                payment = %payment,
                interest = %interest,
                ending_balance = %ending_balance,
                "billing cycle applied"
            );

            cycles.push(CycleRecord {
                cycle_number: counters.total_cycles,
                beginning_balance: balance,
                payment_amount: payment,
                interest_portion: interest,
                principal_portion: principal,
                ending_balance,
                highest_threshold: UtilizationThreshold::highest_exceeded(ending_balance, credit_line),
            });

            balance = ending_balance;
        }

        info!(
            cycles = counters.total_cycles,
            outcome = ?outcome,
            total_interest = %total_interest,
            "payoff projection finished"
        );

        PayoffProjection {
            counters,
            outcome,
            cycles,
            total_paid,
            total_interest,
            final_balance: balance,
        }
    }
}

/// number of cycles to pay off the balance and cycles spent above 25%, 50%
/// and 75% of the credit line
///
/// With no `target_payment` the minimum payment is recomputed on the
/// current balance every cycle. Runs until the balance is paid off or a
/// payment no longer covers the interest. Inputs are not validated here.
pub fn remaining_payments(
    balance: Money,
    apr: Rate,
    target_payment: Option<Money>,
    credit_line: Money,
    fees: Money,
) -> PayoffCounters {
    let terms = CardTerms {
        balance,
        apr,
        credit_line,
        target_payment,
        fees,
    };
    PayoffSimulator::new(terms).run().counters
}
