//! Metrics collection and exposition.
//!
//! # Metrics
//! - `either_dispatch_total` (counter): matcher invocations by `matcher`
//! - `either_dispatch_errors_total` (counter): failed renders by `kind`

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::dispatch::DispatchError;
use crate::registry::MatcherKey;

pub const DISPATCH_TOTAL: &str = "either_dispatch_total";
pub const DISPATCH_ERRORS_TOTAL: &str = "either_dispatch_errors_total";

/// Install the Prometheus recorder with an HTTP scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    ::metrics::describe_counter!(DISPATCH_TOTAL, "Matcher invocations");
    ::metrics::describe_counter!(DISPATCH_ERRORS_TOTAL, "Outcomes that failed to render");
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_dispatch(matcher: &MatcherKey) {
    ::metrics::counter!(DISPATCH_TOTAL, "matcher" => matcher.to_string()).increment(1);
}

pub fn record_dispatch_error(error: &DispatchError) {
    ::metrics::counter!(DISPATCH_ERRORS_TOTAL, "kind" => error.kind()).increment(1);
}
