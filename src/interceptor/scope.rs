use crate::di::Container;
use crate::interceptor::{Interceptor, InterceptorResult, Next, RequestId};
use crate::scope::{RequestScope, ScopeName};
use async_trait::async_trait;
use axum::{body::Body, http::Request};
use std::sync::Arc;

/// Opens the `http-request` scope for every request
///
/// The new scope is a child of the application container and is inserted
/// into the request extensions as a [`RequestScope`]. A [`RequestId`] already
/// present in the extensions is registered on the scope.
pub struct RequestScopeInterceptor {
    container: Arc<Container>,
}

impl RequestScopeInterceptor {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }
}

#[async_trait]
impl Interceptor for RequestScopeInterceptor {
    async fn intercept(&self, mut request: Request<Body>, next: Next) -> InterceptorResult {
        let mut scope = self.container.open_scope(ScopeName::HttpRequest);
        if let Some(id) = request.extensions().get::<RequestId>() {
            scope.register(*id);
        }

        request
            .extensions_mut()
            .insert(RequestScope::new(Arc::new(scope)));
        next.run(request).await
    }
}
