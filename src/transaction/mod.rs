//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `NewTransaction` fields used to create one
//! - Request validation for new transactions
//! - Route handlers for creating and listing transactions

mod core;
mod create_endpoint;
mod list_endpoint;

pub use core::{NewTransaction, Transaction, TransactionId, TransactionKind};
pub use create_endpoint::{
    AmountInput, TransactionCreated, TransactionRequest, create_transaction_endpoint,
};
pub use list_endpoint::{TransactionList, get_transactions_endpoint};
