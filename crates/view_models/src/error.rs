use thiserror::Error;

/// Field-validation failures, carrying the exact message the client toasts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid amount")]
    InvalidAmount,

    #[error("Insufficient wallet balance")]
    InsufficientBalance,

    #[error("Please fill all required fields")]
    MissingInvestorFields,

    #[error("Please fill in all required fields")]
    MissingSchemeFields,

    #[error("Scheme {0} not found")]
    UnknownScheme(String),
}
