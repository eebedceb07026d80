//! In-memory balance sheet: credit/debit transactions, the draft being edited
//! and the totals derived from them.
pub use error::LedgerError;
pub use ledger::{Draft, Ledger};
pub use totals::Totals;
pub use transaction::{Transaction, TransactionId, TransactionKind};

pub mod amount;
mod error;
mod ledger;
mod totals;
mod transaction;
