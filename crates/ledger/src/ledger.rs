use crate::{LedgerError, Totals, Transaction, TransactionId, TransactionKind};

/// Uncommitted input for the next transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub amount: f64,
    pub kind: TransactionKind,
    pub purpose: String,
}

impl Draft {
    /// Empty draft (`0`, `kind`, `""`).
    #[must_use]
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            amount: 0.0,
            kind,
            purpose: String::new(),
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new(TransactionKind::default())
    }
}

/// Session state of the balance sheet: the recorded transactions plus the
/// draft being edited.
///
/// The value is immutable from the outside. Every transition consumes or
/// borrows the current value and returns its replacement, so a failed
/// [`add_transaction`](Ledger::add_transaction) leaves the caller holding the
/// untouched original.
///
/// ```rust
/// use ledger::{Ledger, TransactionKind};
///
/// let ledger = Ledger::new()
///     .set_amount(100.0)
///     .set_purpose("salary")
///     .add_transaction()
///     .unwrap()
///     .set_kind(TransactionKind::Debit)
///     .set_amount(40.0)
///     .add_transaction()
///     .unwrap();
///
/// let totals = ledger.totals();
/// assert_eq!(ledger.len(), 2);
/// assert_eq!(totals.balance, 60.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    draft: Draft,
    next_id: TransactionId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_kind(TransactionKind::default())
    }

    /// Empty ledger whose draft starts on `kind`.
    #[must_use]
    pub fn with_default_kind(kind: TransactionKind) -> Self {
        Self {
            transactions: Vec::new(),
            draft: Draft::new(kind),
            next_id: TransactionId::FIRST,
        }
    }

    /// Recorded transactions, in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sets the draft amount. Any value is accepted here, including
    /// non-positive and NaN; validation happens on submit.
    #[must_use]
    pub fn set_amount(self, amount: f64) -> Self {
        Self {
            draft: Draft {
                amount,
                ..self.draft
            },
            ..self
        }
    }

    #[must_use]
    pub fn set_purpose(self, purpose: impl Into<String>) -> Self {
        Self {
            draft: Draft {
                purpose: purpose.into(),
                ..self.draft
            },
            ..self
        }
    }

    #[must_use]
    pub fn set_kind(self, kind: TransactionKind) -> Self {
        Self {
            draft: Draft { kind, ..self.draft },
            ..self
        }
    }

    /// Commits the draft as a new transaction.
    ///
    /// Returns the replacement ledger with the transaction appended, the id
    /// counter advanced and the draft reset to `0` / `""` with the type kept.
    ///
    /// # Errors
    ///
    /// [`LedgerError::NonPositiveAmount`] when the draft amount is `<= 0`.
    /// NaN does not compare `<= 0` and is accepted.
    pub fn add_transaction(&self) -> Result<Self, LedgerError> {
        let amount = self.draft.amount;
        if amount <= 0.0 {
            tracing::debug!(amount, "draft rejected");
            return Err(LedgerError::NonPositiveAmount(amount));
        }

        let transaction = Transaction {
            id: self.next_id,
            kind: self.draft.kind,
            amount,
            purpose: self.draft.purpose.clone(),
        };
        tracing::debug!(
            id = transaction.id.get(),
            kind = %transaction.kind,
            amount,
            "transaction recorded"
        );

        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.extend_from_slice(&self.transactions);
        transactions.push(transaction);

        Ok(Self {
            transactions,
            draft: Draft::new(self.draft.kind),
            next_id: self.next_id.next(),
        })
    }

    /// Credits, debits and balance over the current list.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ledger_has_default_draft() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.draft(), &Draft::new(TransactionKind::Credit));
    }

    #[test]
    fn configured_kind_seeds_the_draft() {
        let ledger = Ledger::with_default_kind(TransactionKind::Debit);
        assert_eq!(ledger.draft().kind, TransactionKind::Debit);
    }

    #[test]
    fn setters_only_touch_their_field() {
        let ledger = Ledger::new()
            .set_amount(-4.0)
            .set_purpose("rent")
            .set_kind(TransactionKind::Debit);
        assert_eq!(
            ledger.draft(),
            &Draft {
                amount: -4.0,
                kind: TransactionKind::Debit,
                purpose: "rent".to_string(),
            }
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_leaves_receiver_untouched() {
        let before = Ledger::new().set_amount(10.0).set_purpose("tip");
        let after = before.add_transaction().unwrap();

        assert!(before.is_empty());
        assert_eq!(before.draft().amount, 10.0);
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn add_resets_amount_and_purpose_but_keeps_kind() {
        let ledger = Ledger::new()
            .set_kind(TransactionKind::Debit)
            .set_amount(12.0)
            .set_purpose("lunch")
            .add_transaction()
            .unwrap();
        assert_eq!(ledger.draft(), &Draft::new(TransactionKind::Debit));
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        for amount in [0.0, -0.0, -1.0, f64::NEG_INFINITY] {
            let ledger = Ledger::new().set_amount(amount);
            let err = ledger.add_transaction().unwrap_err();
            assert!(matches!(err, LedgerError::NonPositiveAmount(_)));
            assert!(ledger.is_empty());
        }
    }

    #[test]
    fn nan_passes_validation() {
        let ledger = Ledger::new().set_amount(f64::NAN).add_transaction().unwrap();
        assert_eq!(ledger.len(), 1);
        assert!(ledger.transactions()[0].amount.is_nan());
    }

    #[test]
    fn ids_follow_the_counter() {
        let ledger = Ledger::new()
            .set_amount(1.0)
            .add_transaction()
            .unwrap()
            .set_amount(2.0)
            .add_transaction()
            .unwrap();
        let ids: Vec<u64> = ledger.transactions().iter().map(|tx| tx.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
