//! Route handlers that report on the server itself rather than on transactions.

use axum::{Json, extract::State};
use serde::Serialize;
use time::OffsetDateTime;

use crate::AppState;

/// The response body for the health check.
#[derive(Debug, Serialize)]
pub struct Health {
    /// Always "healthy" while the server can answer requests.
    pub status: &'static str,
    /// When the check was answered.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Seconds since the server started.
    pub uptime: f64,
}

/// A route handler that reports the server is up and for how long.
pub async fn get_health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: OffsetDateTime::now_utc(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

/// The response body for the deployment check.
#[derive(Debug, Serialize)]
pub struct DeploymentCheck {
    /// A fixed message confirming the deployment is serving requests.
    pub message: &'static str,
    /// When the check was answered.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// The version of this crate that is running.
    pub version: &'static str,
}

/// A route handler the deployment pipeline calls to confirm a release is live.
pub async fn get_cicd_test() -> Json<DeploymentCheck> {
    Json(DeploymentCheck {
        message: "CI/CD Pipeline Working Successfully!",
        timestamp: OffsetDateTime::now_utc(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
