//! Errors the ledger can return.
//!
//! - [`NonPositiveAmount`] when a draft with an amount `<= 0` is submitted.
//! - [`UnknownKind`] when a transaction type name cannot be parsed.
//!
//!  [`NonPositiveAmount`]: LedgerError::NonPositiveAmount
//!  [`UnknownKind`]: LedgerError::UnknownKind
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Amount must be greater than 0")]
    NonPositiveAmount(f64),
    #[error("unknown transaction type \"{0}\" (expected credit or debit)")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_is_user_facing() {
        let err = LedgerError::NonPositiveAmount(0.0);
        assert_eq!(err.to_string(), "Amount must be greater than 0");
    }

    #[test]
    fn unknown_kind_names_the_input() {
        let err = LedgerError::UnknownKind("refund".to_string());
        assert!(err.to_string().contains("\"refund\""));
    }
}
