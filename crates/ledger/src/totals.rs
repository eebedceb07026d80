use crate::{Transaction, TransactionKind};

/// Aggregates derived from the transaction list.
///
/// Always recomputed from the list; nothing is maintained incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub credits: f64,
    pub debits: f64,
    pub balance: f64,
}

impl Totals {
    #[must_use]
    pub fn compute(transactions: &[Transaction]) -> Self {
        let credits = sum_kind(transactions, TransactionKind::Credit);
        let debits = sum_kind(transactions, TransactionKind::Debit);
        Self {
            credits,
            debits,
            balance: credits - debits,
        }
    }
}

fn sum_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.kind == kind)
        .fold(0.0, |total, tx| total + tx.amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransactionId;

    fn tx(id: u64, kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            kind,
            amount,
            purpose: String::new(),
        }
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(Totals::compute(&[]), Totals::default());
    }

    #[test]
    fn sums_by_kind_and_subtracts() {
        let list = [
            tx(1, TransactionKind::Credit, 100.0),
            tx(2, TransactionKind::Debit, 40.0),
            tx(3, TransactionKind::Credit, 2.5),
            tx(4, TransactionKind::Debit, 70.0),
        ];
        let totals = Totals::compute(&list);
        assert_eq!(totals.credits, 102.5);
        assert_eq!(totals.debits, 110.0);
        assert_eq!(totals.balance, -7.5);
    }

    #[test]
    fn nan_amount_poisons_its_side_only() {
        let list = [
            tx(1, TransactionKind::Credit, f64::NAN),
            tx(2, TransactionKind::Debit, 5.0),
        ];
        let totals = Totals::compute(&list);
        assert!(totals.credits.is_nan());
        assert_eq!(totals.debits, 5.0);
        assert!(totals.balance.is_nan());
    }
}
