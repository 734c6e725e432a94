//! Prometheus metrics for the API: the registry, the middleware that records
//! each request and the handler that exposes them.

use std::{fmt, sync::Arc, time::Instant};

use axum::{
    extract::{MatchedPath, Request, State},
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::{IntoResponse, Response},
};
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

use crate::Error;

/// The name of the counter for the total number of requests.
pub const REQUESTS_TOTAL: &str = "finance_api_requests_total";
/// The name of the histogram of response times in seconds.
pub const RESPONSE_TIME_SECONDS: &str = "finance_api_response_time_seconds";

const RESPONSE_TIME_BUCKETS: [f64; 5] = [0.1, 0.5, 1.0, 2.0, 5.0];

/// The `endpoint` label for requests that did not match a route.
const UNMATCHED_ENDPOINT: &str = "unmatched";

/// The metrics registry and the metrics recorded for every request.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    requests_total: IntCounterVec,
    response_time: Histogram,
}

impl Metrics {
    /// Create a registry with the request counter, the response time
    /// histogram and, on Linux, the process metrics.
    ///
    /// # Errors
    /// Returns an [Error::MetricsError] if a metric is invalid or registered
    /// twice.
    pub fn new() -> Result<Self, Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(REQUESTS_TOTAL, "Total HTTP requests to finance API"),
            &["method", "endpoint"],
        )?;
        let response_time = Histogram::with_opts(
            HistogramOpts::new(RESPONSE_TIME_SECONDS, "Response time for API requests")
                .buckets(RESPONSE_TIME_BUCKETS.to_vec()),
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(response_time.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry,
            requests_total,
            response_time,
        })
    }

    /// Count one request and record how long it took to respond.
    pub fn observe(&self, method: &str, endpoint: &str, seconds: f64) {
        self.requests_total
            .with_label_values(&[method, endpoint])
            .inc();
        self.response_time.observe(seconds);
    }

    /// Encode every registered metric in the Prometheus text format.
    ///
    /// # Errors
    /// Returns an [Error::MetricsError] if the metrics cannot be encoded.
    pub fn encode(&self) -> Result<String, Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;

        String::from_utf8(buffer).map_err(|error| Error::MetricsError(error.to_string()))
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics").finish_non_exhaustive()
    }
}

/// Record the method, route and response time of each request.
///
/// The request is recorded after the response has been produced, so a
/// request to the metrics endpoint shows up in the next scrape.
pub async fn track_metrics(
    State(metrics): State<Arc<Metrics>>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched_path| matched_path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_owned());

    let response = next.run(request).await;

    metrics.observe(&method, &endpoint, start.elapsed().as_secs_f64());

    response
}

/// A route handler that returns all metrics in the Prometheus text format.
pub async fn get_metrics(State(metrics): State<Arc<Metrics>>) -> Response {
    match metrics.encode() {
        Ok(body) => ([(CONTENT_TYPE, TextEncoder::new().format_type())], body).into_response(),
        Err(error) => error.into_response(),
    }
}
