//! In-process HTTP client for exercising a router in tests
//!
//! Requests are sent straight to the router with
//! [`tower::ServiceExt::oneshot`]; no socket is opened.
//!
//! ```
//! use request_echo::controller::GetController;
//! use request_echo::lifecycle::Application;
//! use request_echo::testing::TestClient;
//! use axum::http::StatusCode;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> request_echo::Result<()> {
//! let app = Application::builder().controller::<GetController>().build()?;
//! let client = TestClient::new(app.router());
//!
//! let response = client
//!     .get("/get/query-params")
//!     .query("a", "1")
//!     .send()
//!     .await?;
//! response.assert_status(StatusCode::OK);
//! response.assert_json(&serde_json::json!({ "a": "1" }));
//! # Ok(())
//! # }
//! ```

use crate::error::{EchoError, Result};
use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn get(&self, path: impl Into<String>) -> TestRequest {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: impl Into<String>) -> TestRequest {
        self.request(Method::POST, path)
    }

    pub fn request(&self, method: Method, path: impl Into<String>) -> TestRequest {
        TestRequest {
            router: self.router.clone(),
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Body::empty(),
        }
    }
}

pub struct TestRequest {
    router: Router,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Body,
}

impl TestRequest {
    /// Append a query parameter. Parameters are urlencoded on send.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a header value. Repeated calls with the same name add values.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    fn uri(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query)
            .finish();
        let separator = if self.path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.path, separator, query)
    }

    pub async fn send(self) -> Result<TestResponse> {
        let uri = self.uri();
        let mut builder = Request::builder().method(self.method).uri(&uri);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let request = builder
            .body(self.body)
            .map_err(|e| EchoError::Internal(format!("invalid test request {}: {}", uri, e)))?;

        let response = self
            .router
            .oneshot(request)
            .await
            .unwrap_or_else(|never| match never {});

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| EchoError::Internal(format!("failed to read response body: {}", e)))?;

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl TestResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| EchoError::Internal(format!("response is not valid JSON: {}", e)))
    }

    #[track_caller]
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "unexpected status, body: {}",
            self.text()
        );
        self
    }

    /// Compare the body with `expected` as JSON values.
    #[track_caller]
    pub fn assert_json<T: Serialize>(&self, expected: &T) -> &Self {
        let actual: serde_json::Value = match serde_json::from_slice(&self.body) {
            Ok(value) => value,
            Err(e) => panic!("response is not valid JSON ({}): {}", e, self.text()),
        };
        let expected = match serde_json::to_value(expected) {
            Ok(value) => value,
            Err(e) => panic!("expected value does not serialize: {}", e),
        };
        assert_eq!(actual, expected);
        self
    }
}
