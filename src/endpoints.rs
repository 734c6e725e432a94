//! The API endpoints URIs.

/// The route for checking that the server is up.
pub const HEALTH: &str = "/health";
/// The route for scraping Prometheus metrics.
pub const METRICS: &str = "/metrics";
/// The route to create and list transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for the overview of totals and recent transactions.
pub const DASHBOARD_API: &str = "/api/dashboard";
/// The route used by the deployment pipeline to check a new release is live.
pub const CICD_TEST: &str = "/cicd-test";

/// The endpoints advertised to clients that request an unknown route.
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "GET /health",
    "GET /metrics",
    "POST /api/transactions",
    "GET /api/transactions",
    "GET /api/dashboard",
];
