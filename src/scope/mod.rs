//! Named execution scopes
//!
//! Every request runs inside a chain of container scopes. The application
//! opens `http` once at startup and the request-scope interceptor opens
//! `http-request` for each request, storing it as a [`RequestScope`]
//! extension. Handlers that need the scope list take [`ActiveScopes`] as an
//! argument instead of reading global state.

use crate::di::Container;
use crate::error::EchoError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::Serialize;
use std::sync::Arc;

/// Well-known scope names
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ScopeName {
    Root,
    Http,
    HttpRequest,
    #[strum(to_string = "{0}")]
    Custom(String),
}

impl From<&str> for ScopeName {
    fn from(name: &str) -> Self {
        match name {
            "root" => ScopeName::Root,
            "http" => ScopeName::Http,
            "http-request" => ScopeName::HttpRequest,
            other => ScopeName::Custom(other.to_string()),
        }
    }
}

impl From<String> for ScopeName {
    fn from(name: String) -> Self {
        ScopeName::from(name.as_str())
    }
}

/// The container scope opened for the current request
#[derive(Debug, Clone)]
pub struct RequestScope(Arc<Container>);

impl RequestScope {
    pub fn new(container: Arc<Container>) -> Self {
        Self(container)
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.0
    }
}

/// Names of the scopes active for a request, innermost first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveScopes(Vec<String>);

impl ActiveScopes {
    pub fn from_container(container: &Container) -> Self {
        Self(container.scope_names())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ActiveScopes {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl<S> FromRequestParts<S> for ActiveScopes
where
    S: Send + Sync,
{
    type Rejection = EchoError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestScope>()
            .map(|scope| ActiveScopes::from_container(scope.container()))
            .ok_or_else(|| EchoError::scope_mismatch("no request scope is active"))
    }
}
