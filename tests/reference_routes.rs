//! The reference routes rendered through the default matchers.

use axum::http::{header, StatusCode};
use either_dispatch::{AppConfig, HttpServer};

mod common;

fn router() -> axum::Router {
    HttpServer::new(AppConfig::default()).router()
}

#[tokio::test]
async fn test_value_matcher() {
    let (status, headers, body) = common::get(router(), "/value").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Alright");
    assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8");
}

#[tokio::test]
async fn test_status_matcher() {
    let (status, headers, body) = common::get(router(), "/status").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "");
    assert!(headers.get(header::CONTENT_TYPE).is_none());
}

#[tokio::test]
async fn test_rack_right() {
    let (status, _, body) = common::get(router(), "/rack/right").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_rack_left() {
    let (status, _, body) = common::get(router(), "/rack/left").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "");
}

#[tokio::test]
async fn test_rack_symbol_right() {
    let (status, _, body) = common::get(router(), "/rack/symbol/right").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_rack_symbol_left_redirects() {
    let (status, headers, body) = common::get(router(), "/rack/symbol/left").await;
    assert_eq!(status, StatusCode::FOUND);
    assert!(status.is_redirection());
    assert_eq!(headers[header::LOCATION], "/rack/symbol/right");
    assert_eq!(body, "");
}

#[tokio::test]
async fn test_plain_value_passes_through() {
    let (status, _, body) = common::get(router(), "/neither").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "neither");
}

#[tokio::test]
async fn test_unknown_route_is_untouched() {
    let (status, _, body) = common::get(router(), "/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "");
}
