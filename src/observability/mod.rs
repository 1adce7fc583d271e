//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! dispatch / result hook produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (dispatch and failure counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON optional) for machine parsing
//! - Metrics go through the `metrics` facade; without an installed recorder
//!   they are no-ops

pub mod logging;
pub mod metrics;
