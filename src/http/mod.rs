//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! axum handler
//!     → handler.rs (HandlerResult: Raw body or Outcome)
//!     → middleware.rs (result hook: outcome? → Application::render)
//!         → response.rs (ResponseContext mutated by matchers)
//!         → status.rs (numeric / symbolic status)
//!     → Send to client
//! ```

pub mod handler;
pub mod middleware;
pub mod response;
pub mod server;
pub mod status;

pub use handler::HandlerResult;
pub use response::ResponseContext;
pub use server::HttpServer;
pub use status::parse_status;
