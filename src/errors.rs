use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoffError {
    #[error("balance amount must be positive")]
    InvalidBalance {
        balance: Money,
    },

    #[error("APR must be between 0 and 100")]
    InvalidApr {
        apr: i64,
    },

    #[error("credit line must be positive")]
    InvalidCreditLine {
        credit_line: Money,
    },

    #[error("payment amount must be positive")]
    InvalidPayment {
        payment: Money,
    },

    #[error("fees must be positive")]
    InvalidFees {
        fees: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, PayoffError>;
