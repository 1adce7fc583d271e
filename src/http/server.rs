//! Demo HTTP server.
//!
//! # Responsibilities
//! - Build an axum `Router` with the reference routes
//! - Install the outcome result hook and request tracing
//! - Bind and serve until Ctrl+C
//!
//! # Routes
//! ```text
//! /value              Success("Alright")                          → 200 "Alright"
//! /status             Failure("unauthorized")                     → 401 ""
//! /rack/right         Success([200, {}, "OK"])                    → 200 "OK"
//! /rack/left          Failure(["unauthorized", {}, null])         → 401 ""
//! /rack/symbol/right  Success(["ok", {}, "OK"])                   → 200 "OK"
//! /rack/symbol/left   Failure(["found", {"Location": ...}, null]) → 302 ""
//! /neither            "neither"                                   → 200 "neither"
//! ```

use axum::{routing::get, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::app::Application;
use crate::config::AppConfig;
use crate::http::HandlerResult;
use crate::outcome::{failure, success, Attempt};

/// HTTP server serving the reference routes.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let app = Application::with_config(config.matchers, &config.response);
        Self {
            router: Self::build_router(&app),
        }
    }

    fn build_router(app: &Application<Attempt>) -> Router {
        app.install(reference_routes()).layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for serving without binding a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Routes exercising every default matcher plus the raw fallback.
pub fn reference_routes() -> Router {
    Router::new()
        .route("/value", get(value))
        .route("/status", get(status))
        .route("/rack/right", get(rack_right))
        .route("/rack/left", get(rack_left))
        .route("/rack/symbol/right", get(rack_symbol_right))
        .route("/rack/symbol/left", get(rack_symbol_left))
        .route("/neither", get(neither))
}

async fn value() -> HandlerResult<Attempt> {
    success("Alright").into()
}

async fn status() -> HandlerResult<Attempt> {
    failure("unauthorized").into()
}

async fn rack_right() -> HandlerResult<Attempt> {
    success(json!([200, {}, "OK"])).into()
}

async fn rack_left() -> HandlerResult<Attempt> {
    failure(json!(["unauthorized", {}, null])).into()
}

async fn rack_symbol_right() -> HandlerResult<Attempt> {
    success(json!(["ok", {}, "OK"])).into()
}

async fn rack_symbol_left() -> HandlerResult<Attempt> {
    failure(json!(["found", {"Location": "/rack/symbol/right"}, null])).into()
}

async fn neither() -> HandlerResult<Attempt> {
    "neither".into()
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
