use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::LedgerError;

/// Direction of a transaction.
///
/// The lowercase name (`credit` / `debit`) is the canonical text form, used in
/// the transaction table, configuration files and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Inflow, counted in the credits total.
    #[default]
    Credit,
    /// Outflow, counted in the debits total.
    Debit,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Credit, TransactionKind::Debit];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }

    /// Label shown in the type selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Credit => "Credit",
            Self::Debit => "Debit",
        }
    }

    /// The other option of the selector.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Credit => Self::Debit,
            Self::Debit => Self::Credit,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            _ => Err(LedgerError::UnknownKind(s.to_string())),
        }
    }
}

/// Session-unique transaction id, starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    pub const FIRST: TransactionId = TransactionId(1);

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded credit or debit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub amount: f64,
    pub purpose: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("credit".parse::<TransactionKind>(), Ok(TransactionKind::Credit));
        assert_eq!(" Debit ".parse::<TransactionKind>(), Ok(TransactionKind::Debit));
        assert_eq!(
            "refund".parse::<TransactionKind>(),
            Err(LedgerError::UnknownKind("refund".to_string()))
        );
    }

    #[test]
    fn kind_display_is_lowercase_and_label_capitalised() {
        assert_eq!(TransactionKind::Debit.to_string(), "debit");
        assert_eq!(TransactionKind::Debit.label(), "Debit");
    }

    #[test]
    fn toggled_switches_between_the_two_options() {
        assert_eq!(TransactionKind::Credit.toggled(), TransactionKind::Debit);
        assert_eq!(TransactionKind::Debit.toggled(), TransactionKind::Credit);
    }

    #[test]
    fn ids_increase_by_one() {
        assert_eq!(TransactionId::FIRST.get(), 1);
        assert_eq!(TransactionId::FIRST.next(), TransactionId::new(2));
    }
}
