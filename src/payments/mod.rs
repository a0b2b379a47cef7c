pub mod minimum;
pub mod payoff;

pub use minimum::get_min_payment;
pub use payoff::{
    remaining_payments, CycleRecord, PayoffCounters, PayoffOutcome, PayoffProjection,
    PayoffSimulator,
};
