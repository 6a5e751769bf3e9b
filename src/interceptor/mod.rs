use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

mod layer;
mod logging;
mod scope;

pub use layer::{InterceptorLayer, InterceptorMiddleware};
pub use logging::{LoggingInterceptor, RequestId};
pub use scope::RequestScopeInterceptor;

/// standard return type for Interceptors
pub type InterceptorResult = Result<Response, InterceptorError>;

/// A type-erased error for interceptors
pub type InterceptorError = Box<dyn std::error::Error + Send + Sync>;

pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

/// Represents the next handler in the chain
pub struct Next {
    run: Box<dyn FnOnce(Request<Body>) -> BoxFuture + Send>,
}

impl Next {
    /// Create a new Next handler
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request<Body>) -> BoxFuture + Send + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Execute the next handler
    pub async fn run(self, request: Request<Body>) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// The Interceptor trait
///
/// Interceptors can inspect/modify the request before it reaches the handler,
/// and inspect/modify the response after the handler returns.
///
/// # Example
/// ```
/// use request_echo::interceptor::{Interceptor, InterceptorResult, Next};
/// use request_echo::async_trait;
/// use axum::{body::Body, http::Request};
///
/// struct TagInterceptor;
///
/// #[async_trait]
/// impl Interceptor for TagInterceptor {
///     async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
///         let mut response = next.run(request).await?;
///         response.headers_mut().insert("x-tagged", "1".parse().unwrap());
///         Ok(response)
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult;
}
