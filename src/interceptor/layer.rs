use crate::interceptor::{BoxFuture, Interceptor, Next};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower Layer for invoking a chain of Interceptors
///
/// Interceptors run in the order they were given: the first one sees the
/// request first and the response last. An error returned by any interceptor
/// is turned into a `500 Internal Server Error` response.
#[derive(Clone)]
pub struct InterceptorLayer {
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
}

impl InterceptorLayer {
    pub fn new(interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        Self {
            interceptors: Arc::new(interceptors),
        }
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl<S> Layer<S> for InterceptorLayer {
    type Service = InterceptorMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InterceptorMiddleware {
            inner,
            interceptors: Arc::clone(&self.interceptors),
        }
    }
}

#[derive(Clone)]
pub struct InterceptorMiddleware<S> {
    inner: S,
    interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
}

impl<S> Service<Request<Body>> for InterceptorMiddleware<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let interceptors = Arc::clone(&self.interceptors);

        // The clone has not been driven to readiness; keep the one that has.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let mut chain = Next::new(move |req: Request<Body>| -> BoxFuture {
                Box::pin(async move {
                    match inner.call(req).await {
                        Ok(response) => Ok(response),
                        Err(never) => match never {},
                    }
                })
            });

            // Wrap from the innermost outwards so interceptors[0] runs first.
            for i in (0..interceptors.len()).rev() {
                let interceptors = Arc::clone(&interceptors);
                let next = chain;
                chain = Next::new(move |req: Request<Body>| -> BoxFuture {
                    Box::pin(async move { interceptors[i].intercept(req, next).await })
                });
            }

            Ok(chain.run(request).await.unwrap_or_else(|e| {
                tracing::error!(error = %e, "interceptor chain failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }))
        })
    }
}
