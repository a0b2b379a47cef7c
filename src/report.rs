use std::fmt::Write;

use crate::config::{CardTerms, SimulationConfig};
use crate::decimal::Money;
use crate::payments::{PayoffOutcome, PayoffProjection, PayoffSimulator};
use crate::utilization::UtilizationThreshold;

/// console summary of one payoff projection
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffReport {
    pub recommended_minimum: Money,
    pub target_payment: Option<Money>,
    pub max_cycles: Option<u32>,
    pub projection: PayoffProjection,
}

impl PayoffReport {
    /// compute the starting minimum and run the payoff loop once
    pub fn project(terms: &CardTerms, config: SimulationConfig) -> Self {
        let recommended_minimum = config.minimum_payment.minimum_for(terms.balance, terms.fees);
        let projection = PayoffSimulator::with_config(terms.clone(), config).run();

        Self {
            recommended_minimum,
            target_payment: terms.target_payment,
            max_cycles: config.limits.max_cycles,
            projection,
        }
    }

    pub fn pays_minimum(&self) -> bool {
        self.target_payment.is_none()
    }

    /// shown whether or not a target payment was given
    pub fn recommended_payment_line(&self) -> String {
        format!(
            "Your recommended starting minimum payment is {}",
            self.recommended_minimum.display_cents()
        )
    }

    pub fn payoff_line(&self) -> String {
        let cycles = self.projection.counters.total_cycles;
        match self.target_payment {
            None => format!(
                "If you pay the minimum payment each month, you will pay off your balance in {} payments",
                cycles
            ),
            Some(target) => format!(
                "If you make payments of {}, you will pay off your balance in {} payments",
                target.display_cents(),
                cycles
            ),
        }
    }

    pub fn outcome_line(&self) -> Option<String> {
        match self.projection.outcome {
            PayoffOutcome::PaidOff => None,
            PayoffOutcome::NeverPaidOff => Some("The balance will never be paid off".to_string()),
            PayoffOutcome::CycleLimitReached => Some(format!(
                "Stopped after {} billing cycles with {} still owed",
                self.projection.counters.total_cycles,
                self.projection.final_balance.display_cents()
            )),
        }
    }

    /// one statement per utilization threshold
    pub fn threshold_lines(&self) -> Vec<String> {
        UtilizationThreshold::ALL
            .iter()
            .map(|threshold| {
                format!(
                    "You will spend a total of {} months over {} of the credit line",
                    self.projection.counters.cycles_above(*threshold),
                    threshold
                )
            })
            .collect()
    }

    /// recommended minimum, payoff statement and, when paying the minimum,
    /// the threshold statements
    ///
    /// A run cut short by a cycle cap has no payoff count or totals to
    /// report, so only the stop line follows the recommended minimum.
    pub fn summary(&self) -> String {
        let mut lines = vec![self.recommended_payment_line()];
        if let Some(line) = self.outcome_line() {
            lines.push(line);
        }
        if self.projection.outcome != PayoffOutcome::CycleLimitReached {
            lines.push(self.payoff_line());
            if self.pays_minimum() {
                lines.extend(self.threshold_lines());
            }
        }
        lines.join("\n")
    }

    /// per-cycle breakdown followed by totals
    pub fn schedule(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>5}  {:>12}  {:>10}  {:>10}  {:>10}  {:>12}",
            "cycle", "start", "payment", "interest", "principal", "end"
        );
        for cycle in &self.projection.cycles {
            let _ = writeln!(
                out,
                "{:>5}  {:>12}  {:>10}  {:>10}  {:>10}  {:>12}",
                cycle.cycle_number,
                cycle.beginning_balance.display_cents(),
                cycle.payment_amount.display_cents(),
                cycle.interest_portion.display_cents(),
                cycle.principal_portion.display_cents(),
                cycle.ending_balance.display_cents()
            );
        }
        let _ = writeln!(out, "Total paid: {}", self.projection.total_paid.display_cents());
        let _ = write!(out, "Total interest: {}", self.projection.total_interest.display_cents());
        out
    }

    pub fn render(&self, with_schedule: bool) -> String {
        if with_schedule {
            format!("{}\n\n{}", self.summary(), self.schedule())
        } else {
            self.summary()
        }
    }
}
