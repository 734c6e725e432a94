//! Implements a struct that holds the state of the REST server.

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use axum::extract::FromRef;

use crate::{Error, ledger::Ledger, metrics::Metrics};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store of all transactions.
    ///
    /// Every read and write of the ledger goes through this one lock.
    pub ledger: Arc<Mutex<Ledger>>,

    /// The Prometheus registry and the request metrics.
    pub metrics: Arc<Metrics>,

    /// When the server state was created, used to report uptime.
    pub started_at: Instant,
}

impl AppState {
    /// Create a new [AppState] with an empty ledger.
    ///
    /// # Errors
    /// Returns an error if the metrics cannot be registered.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            ledger: Arc::new(Mutex::new(Ledger::new())),
            metrics: Arc::new(Metrics::new()?),
            started_at: Instant::now(),
        })
    }
}

/// The state needed to read or write transactions.
#[derive(Debug, Clone)]
pub struct LedgerState {
    /// The store of all transactions.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for LedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

// this impl lets the metrics middleware and handler extract just the metrics
impl FromRef<AppState> for Arc<Metrics> {
    fn from_ref(state: &AppState) -> Self {
        state.metrics.clone()
    }
}
