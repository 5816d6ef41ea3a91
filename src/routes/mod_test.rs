use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::config::{Config, UpstreamTimeouts};

fn test_state() -> AppState {
    AppState::new(Config {
        bind_addr: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        upstream_api_url: "http://127.0.0.1:9".to_owned(),
        timeouts: UpstreamTimeouts { request_secs: 1, connect_secs: 1 },
    })
    .unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = api_routes(test_state())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_non_api_path_is_not_proxied() {
    let resp = api_routes(test_state())
        .oneshot(Request::builder().uri("/votacao").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
