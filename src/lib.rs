//! Render two-variant outcome values returned by axum handlers.
//!
//! Handlers return `HandlerResult<O>`. Plain bodies pass through; outcomes are
//! classified and rendered by a per-application registry of named matchers
//! (`right`/`value`, `left`/`status`, `either`, `rack_either`), which any
//! integrator can override.
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use either_dispatch::{failure, success, Application, Attempt, HandlerResult};
//!
//! async fn show() -> HandlerResult<Attempt> {
//!     success("Alright").into()
//! }
//!
//! async fn deny() -> HandlerResult<Attempt> {
//!     failure("unauthorized").into()
//! }
//!
//! let app = Application::<Attempt>::new();
//! let router: Router = app.install(
//!     Router::new().route("/show", get(show)).route("/deny", get(deny)),
//! );
//! ```

pub mod app;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod observability;
pub mod outcome;
pub mod registry;

pub use app::Application;
pub use config::AppConfig;
pub use dispatch::{DispatchError, Scope};
pub use http::{HandlerResult, HttpServer, ResponseContext};
pub use outcome::{failure, success, Attempt, IntoOutcome, Outcome, Payload};
pub use registry::{Matcher, MatcherKey, MatcherRegistry};

#[cfg(feature = "either")]
pub use outcome::{left, right, Branch};
