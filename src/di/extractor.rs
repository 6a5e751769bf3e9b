use crate::di::Container;
use crate::scope::RequestScope;
use axum::{
    extract::FromRequestParts,
    http::{StatusCode as HttpStatusCode, request::Parts},
};
use std::sync::Arc;

/// Axum extractor for dependency injection
///
/// Resolves from the request scope when one has been opened for the request,
/// otherwise from the container carried by the router state.
///
/// # Example
/// ```
/// use request_echo::Inject;
/// use request_echo::interceptor::RequestId;
///
/// async fn whoami(Inject(id): Inject<RequestId>) -> String {
///     id.to_string()
/// }
/// ```
pub struct Inject<T>(pub Arc<T>);

/// Trait that AppState must implement to provide the DI container
pub trait HasContainer {
    fn get_container(&self) -> &Container;
}

impl<S, T> FromRequestParts<S> for Inject<T>
where
    S: Send + Sync + HasContainer,
    T: 'static + Send + Sync,
{
    type Rejection = (HttpStatusCode, String);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let resolved = match parts.extensions.get::<RequestScope>() {
            Some(scope) => scope.container().resolve::<T>(),
            None => state.get_container().resolve::<T>(),
        };

        resolved.map(Inject).map_err(|e| {
            (
                HttpStatusCode::INTERNAL_SERVER_ERROR,
                format!("Dependency injection failed: {}", e),
            )
        })
    }
}

impl<T> std::ops::Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Inject(Arc::clone(&self.0))
    }
}
