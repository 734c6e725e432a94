//! A finance tracker API that records income and expense transactions in
//! memory and serves their totals, a dashboard overview and Prometheus
//! metrics as JSON over HTTP.
//!
//! The [Ledger] holds every transaction in the order it was recorded. The
//! [summary] functions derive totals and recent activity from a snapshot of
//! it without modifying it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dashboard;
mod endpoints;
mod error;
mod health;
mod internal_server_error;
mod ledger;
mod logging;
mod metrics;
mod not_found;
mod routing;
pub mod summary;
pub mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, LedgerState};
pub use error::Error;
pub use ledger::Ledger;
pub use logging::{LOG_BODY_LENGTH_LIMIT, MAX_BODY_BYTES, logging_middleware};
pub use metrics::Metrics;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
