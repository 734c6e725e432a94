//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState,
    dashboard::get_dashboard_endpoint,
    endpoints,
    health::{get_cicd_test, get_health},
    metrics::{get_metrics, track_metrics},
    not_found::get_404_not_found,
    transaction::{create_transaction_endpoint, get_transactions_endpoint},
};

/// Return a router with all the app's routes.
///
/// Every request, including unmatched ones, is recorded in the request metrics.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(endpoints::METRICS, get(get_metrics))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint).get(get_transactions_endpoint),
        )
        .route(endpoints::DASHBOARD_API, get(get_dashboard_endpoint))
        .route(endpoints::CICD_TEST, get(get_cicd_test))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            track_metrics,
        ))
        .with_state(state)
}
