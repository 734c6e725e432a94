//! The in-memory, append-only store of transactions.

use time::OffsetDateTime;

use crate::transaction::{NewTransaction, Transaction, TransactionId};

/// The authoritative store of all accepted transactions.
///
/// Transactions are kept in the order they were appended and are never
/// modified or removed. IDs start at 1 and increase by one per append.
///
/// The ledger has no internal locking. Share it behind a single
/// `Arc<Mutex<Ledger>>` (see [crate::AppState]) so that concurrent appends
/// cannot hand out the same ID or observe a half-finished append.
#[derive(Debug)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Store a new transaction and return the stored record.
    ///
    /// The transaction gets the next ID and the current UTC time, and its
    /// description is trimmed. `new_transaction` must already be validated.
    pub fn append(&mut self, new_transaction: NewTransaction) -> Transaction {
        self.append_at(new_transaction, OffsetDateTime::now_utc())
    }

    fn append_at(
        &mut self,
        new_transaction: NewTransaction,
        created_at: OffsetDateTime,
    ) -> Transaction {
        let transaction = Transaction {
            id: self.next_id,
            description: new_transaction.description.trim().to_owned(),
            amount: new_transaction.amount,
            kind: new_transaction.kind,
            created_at,
        };

        self.next_id += 1;
        self.transactions.push(transaction.clone());

        transaction
    }

    /// A copy of every transaction in insertion order.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// The number of stored transactions.
    pub fn count(&self) -> usize {
        self.transactions.len()
    }
}
