use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// A fully buffered response from an in-process router call.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Body decoded as JSON, `Value::Null` when empty.
    pub fn json(&self) -> Value {
        if self.body.is_empty() {
            return Value::Null;
        }
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn error_message(&self) -> Option<String> {
        self.json().get("error").and_then(|e| e.as_str()).map(str::to_string)
    }
}

/// Sends one request with a raw body through `app`.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("test request is well-formed");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body is readable")
        .to_vec();

    TestResponse { status, headers, body }
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> TestResponse {
    send_raw(app, method, uri, body.to_string()).await
}

pub async fn send_empty(app: &Router, method: Method, uri: &str) -> TestResponse {
    send_raw(app, method, uri, Body::empty()).await
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send_empty(app, Method::GET, uri).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> TestResponse {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send_empty(app, Method::DELETE, uri).await
}
