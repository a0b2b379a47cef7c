pub mod cli;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod payments;
pub mod report;
pub mod utilization;

// re-export key types
pub use config::{BillingCycle, CardTerms, MinimumPaymentPolicy, SimulationConfig, SimulationLimits};
pub use decimal::{Money, Rate};
pub use errors::{PayoffError, Result};
pub use interest::{interest_charged, CycleAccrual, InterestCalculation, InterestCalculator};
pub use payments::{
    get_min_payment, remaining_payments, CycleRecord, PayoffCounters, PayoffOutcome,
    PayoffProjection, PayoffSimulator,
};
pub use report::PayoffReport;
pub use utilization::UtilizationThreshold;

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
