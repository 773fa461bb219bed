#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Every [`TestApp`] owns a freshly seeded store and serves the REAL kernel
//! router, so tests never observe each other's mutations.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use prize_catalog_kernel::{AppState, Config, routes};

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Five catalogs of ten prizes, as served by default.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let state = AppState::new(config);
        let router = routes::router().with_state(state.clone());
        Self { router, state }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .request(Request::get(uri).body(Body::empty()).unwrap())
            .await;
        split(response).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .request(Request::delete(uri).body(Body::empty()).unwrap())
            .await;
        split(response).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send_json("POST", uri, body.to_string()).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send_json("PUT", uri, body.to_string()).await
    }

    /// Send a raw body with a JSON content type.
    pub async fn send_json(&self, method: &str, uri: &str, body: String) -> (StatusCode, Value) {
        let response = self
            .request(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await;
        split(response).await
    }

    /// GET the prize listing with JSON-encoded `filter` / `pagination`.
    pub async fn list_prizes(
        &self,
        catalog_id: &str,
        filter: Option<&Value>,
        pagination: Option<&Value>,
    ) -> (StatusCode, Value) {
        let mut params = Vec::new();
        if let Some(filter) = filter {
            params.push(format!("filter={}", urlencoding::encode(&filter.to_string())));
        }
        if let Some(pagination) = pagination {
            params.push(format!("pagination={}", urlencoding::encode(&pagination.to_string())));
        }
        let mut uri = format!("/api/catalogs/{catalog_id}/prizes");
        if !params.is_empty() {
            uri.push('?');
            uri.push_str(&params.join("&"));
        }
        self.get(&uri).await
    }
}

/// Split a response into its status and JSON body (`Null` when empty).
pub async fn split(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

/// Ids of the prizes in a listing body.
pub fn prize_ids(body: &Value) -> Vec<u64> {
    body["prizes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}
