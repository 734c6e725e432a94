//! Defines the endpoint that lists every transaction with a summary.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{Error, app_state::LedgerState, summary::Summary, transaction::Transaction};

/// The response body for the transaction list.
#[derive(Debug, Serialize)]
pub struct TransactionList {
    /// All transactions in the order they were recorded.
    pub transactions: Vec<Transaction>,
    /// Totals over `transactions`.
    pub summary: Summary,
}

/// A route handler that returns all transactions and their totals.
pub async fn get_transactions_endpoint(State(state): State<LedgerState>) -> Response {
    let snapshot = match state.ledger.lock() {
        Ok(ledger) => ledger.snapshot(),
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_response();
        }
    };

    let summary = Summary::from_snapshot(&snapshot);

    Json(TransactionList {
        transactions: snapshot,
        summary,
    })
    .into_response()
}
