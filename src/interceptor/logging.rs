use crate::interceptor::{Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use axum::{body::Body, http::Request};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Identifier assigned to each request by [`LoggingInterceptor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub Uuid);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// An interceptor that logs request timing and status
///
/// The request id is stored in the request extensions so later interceptors
/// can pick it up.
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, mut request: Request<Body>, next: Next) -> InterceptorResult {
        let id = RequestId(Uuid::new_v4());
        request.extensions_mut().insert(id);

        let method = request.method().clone();
        let uri = request.uri().clone();
        let span = tracing::info_span!("request", request_id = %id, %method, %uri);
        let start = Instant::now();

        async move {
            tracing::info!("-->");
            match next.run(request).await {
                Ok(response) => {
                    tracing::info!(status = %response.status(), elapsed = ?start.elapsed(), "<--");
                    Ok(response)
                }
                Err(e) => {
                    tracing::error!(error = %e, elapsed = ?start.elapsed(), "<-- failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}
