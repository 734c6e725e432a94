//! The dashboard overview: totals plus the most recent transactions.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    Error,
    app_state::LedgerState,
    summary::{self, Summary},
    transaction::Transaction,
};

/// How many transactions the dashboard shows under recent activity.
pub const RECENT_TRANSACTION_COUNT: usize = 3;

/// The headline figures on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// Sum of all income.
    pub total_income: f64,
    /// Sum of all expenses.
    pub total_expenses: f64,
    /// Income minus expenses.
    pub net_balance: f64,
    /// How many transactions are in the ledger.
    pub transaction_count: usize,
}

impl From<Summary> for Overview {
    fn from(summary: Summary) -> Self {
        Self {
            total_income: summary.total_income,
            total_expenses: summary.total_expenses,
            net_balance: summary.balance,
            transaction_count: summary.transaction_count,
        }
    }
}

/// The response body for the dashboard.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    /// Totals over every transaction in the ledger.
    pub overview: Overview,
    /// Newest first, at most [RECENT_TRANSACTION_COUNT].
    pub recent_transactions: Vec<Transaction>,
    /// When the dashboard was computed.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// A route handler for the dashboard overview.
pub async fn get_dashboard_endpoint(State(state): State<LedgerState>) -> Response {
    let snapshot = match state.ledger.lock() {
        Ok(ledger) => ledger.snapshot(),
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_response();
        }
    };

    Json(Dashboard {
        overview: Summary::from_snapshot(&snapshot).into(),
        recent_transactions: summary::recent(&snapshot, RECENT_TRANSACTION_COUNT),
        timestamp: OffsetDateTime::now_utc(),
    })
    .into_response()
}
