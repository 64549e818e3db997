//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, OptimizeResponse};
use crate::dispatch::{self, DispatchRequest};

/// Returns the configured default inputs.
///
/// `GET /defaults` → 200 + `DispatchRequest` JSON
pub async fn get_defaults(State(state): State<Arc<AppState>>) -> Json<DispatchRequest> {
    Json(state.defaults)
}

/// Solves the posted request.
///
/// `POST /optimize` → 200 + `OptimizeResponse` on success
/// `POST /optimize` → 422 + `OptimizeResponse` when infeasible
/// `POST /optimize` with a negative or non-finite field → 400 + `ErrorResponse`
pub async fn post_optimize(Json(request): Json<DispatchRequest>) -> impl IntoResponse {
    if let Err(e) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ));
    }

    let result = dispatch::optimize(&request);
    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    Ok((status, Json(OptimizeResponse::from(result))))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;

    fn make_test_state() -> Arc<AppState> {
        Arc::new(AppState {
            defaults: DispatchRequest::new(50.0, 60.0, 100.0, 120.0),
        })
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/optimize")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn defaults_returns_200() {
        let app = router(make_test_state());

        let req = Request::builder()
            .uri("/defaults")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["load_mw"], 120.0);
        assert_eq!(json["grid_max_mw"], 100.0);
    }

    #[tokio::test]
    async fn optimize_returns_allocation() {
        let app = router(make_test_state());
        let req = post_json(
            r#"{"solar_max_mw":50,"wind_max_mw":60,"grid_max_mw":100,"load_mw":120}"#,
        );
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["result"]["status"], "success");
        assert_eq!(json["result"]["solar_mw"], 50.0);
        assert_eq!(json["result"]["wind_mw"], 60.0);
        assert_eq!(json["result"]["grid_mw"], 10.0);
    }

    #[tokio::test]
    async fn optimize_infeasible_returns_422() {
        let app = router(make_test_state());
        let req = post_json(
            r#"{"solar_max_mw":10,"wind_max_mw":10,"grid_max_mw":10,"load_mw":50}"#,
        );
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(resp).await;
        assert_eq!(json["result"]["status"], "failure");
        assert_eq!(
            json["summary"],
            "Error: Optimization failed. Please check inputs."
        );
    }

    #[tokio::test]
    async fn optimize_negative_input_returns_400() {
        let app = router(make_test_state());
        let req = post_json(
            r#"{"solar_max_mw":-1,"wind_max_mw":10,"grid_max_mw":10,"load_mw":5}"#,
        );
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert!(
            json["error"]
                .as_str()
                .is_some_and(|e| e.contains("solar_max_mw"))
        );
    }
}
