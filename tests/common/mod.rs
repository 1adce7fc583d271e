//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use either_dispatch::{AppConfig, HttpServer};
use tokio::net::TcpListener;
use tower::ServiceExt;

#[allow(dead_code)]
/// Drive one GET request through `router` without a socket.
pub async fn get(router: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Start the demo server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_demo_server(config: AppConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}
