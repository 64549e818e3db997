//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use renewable_dispatch::api::{AppState, router};
use renewable_dispatch::config::ToolConfig;
use renewable_dispatch::dispatch::DispatchRequest;

fn build_api_state() -> Arc<AppState> {
    Arc::new(AppState {
        defaults: ToolConfig::default_preset().inputs.to_request(),
    })
}

fn optimize_request(req: &DispatchRequest) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/optimize")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(req).unwrap()))
        .unwrap()
}

async fn read_json(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn defaults_round_trip_through_optimize() {
    let app = router(build_api_state());

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/defaults")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let defaults: DispatchRequest = serde_json::from_value(read_json(resp).await).unwrap();
    assert_eq!(defaults, common::default_request());

    let resp = app.oneshot(optimize_request(&defaults)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    assert_eq!(
        json["summary"],
        "Solar Power: 50.00 MW\nWind Power: 60.00 MW\nGrid Power: 10.00 MW"
    );
}

#[tokio::test]
async fn server_keeps_answering_after_infeasible_request() {
    let app = router(build_api_state());

    let bad = DispatchRequest::new(10.0, 10.0, 10.0, 50.0);
    let resp = app.clone().oneshot(optimize_request(&bad)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let good = DispatchRequest::new(10.0, 10.0, 10.0, 25.0);
    let resp = app.oneshot(optimize_request(&good)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = read_json(resp).await;
    assert_eq!(json["result"]["grid_mw"], 5.0);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = router(build_api_state());
    let req = Request::builder()
        .method("POST")
        .uri("/optimize")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"solar_max_mw": 1}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = router(build_api_state());
    let req = Request::builder()
        .uri("/state")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
