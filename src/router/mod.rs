//! Explicit route table
//!
//! Routes are registered centrally at startup as `(method, path, name)`
//! entries bound to axum handlers, then turned into an [`axum::Router`].
//! Names stay available for reverse routing through [`RouteTable::uri`].

use crate::error::{EchoError, Result};
use axum::Router;
use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{self, MethodRouter};

/// A single named route
pub struct Route<S = ()> {
    method: Method,
    path: String,
    name: String,
    handler: MethodRouter<S>,
}

impl<S> Route<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn new(
        method: Method,
        path: impl Into<String>,
        name: impl Into<String>,
        handler: MethodRouter<S>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            name: name.into(),
            handler,
        }
    }

    pub fn get<H, T>(path: impl Into<String>, name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Method::GET, path, name, routing::get(handler))
    }

    pub fn post<H, T>(path: impl Into<String>, name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Method::POST, path, name, routing::post(handler))
    }
}

impl<S> Route<S> {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S> std::fmt::Debug for Route<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("name", &self.name)
            .finish()
    }
}

/// Routes in registration order
pub struct RouteTable<S = ()> {
    routes: Vec<Route<S>>,
}

impl<S> RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a route.
    ///
    /// # Errors
    /// Fails if the path does not start with `/` or uses `:name`/`*name`
    /// segments, if the name is already taken, if the same method is already
    /// bound to the same path, or if the path differs from a registered one
    /// only by capture names.
    pub fn route(&mut self, route: Route<S>) -> Result<&mut Self> {
        if !route.path.starts_with('/') {
            return Err(EchoError::InvalidRoute {
                path: route.path,
                message: "paths must start with '/'".to_string(),
            });
        }
        if let Some(segment) = route
            .path
            .split('/')
            .find(|segment| segment.starts_with(':') || segment.starts_with('*'))
        {
            return Err(EchoError::InvalidRoute {
                message: format!(
                    "segment '{}' uses legacy syntax, write captures as '{{name}}' or '{{*name}}'",
                    segment
                ),
                path: route.path,
            });
        }
        if self.find(&route.name).is_some() {
            return Err(EchoError::route_conflict(format!(
                "route name '{}' is already registered",
                route.name
            )));
        }
        if self
            .routes
            .iter()
            .any(|r| r.path == route.path && r.method == route.method)
        {
            return Err(EchoError::route_conflict(format!(
                "{} {} is already registered",
                route.method, route.path
            )));
        }
        // Same shape under different capture names cannot share a router,
        // whatever the method.
        let shape = path_shape(&route.path);
        if let Some(existing) = self
            .routes
            .iter()
            .find(|r| r.path != route.path && path_shape(&r.path) == shape)
        {
            return Err(EchoError::route_conflict(format!(
                "{} overlaps {}",
                route.path, existing.path
            )));
        }

        tracing::debug!(method = %route.method, path = %route.path, name = %route.name, "registered route");
        self.routes.push(route);
        Ok(self)
    }

    /// Build an axum router serving every registered route.
    pub fn router(&self) -> Router<S> {
        self.routes.iter().fold(Router::new(), |router, route| {
            router.route(&route.path, route.handler.clone())
        })
    }
}

impl<S> RouteTable<S> {
    pub fn routes(&self) -> impl Iterator<Item = &Route<S>> {
        self.routes.iter()
    }

    pub fn find(&self, name: &str) -> Option<&Route<S>> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Build the URI of a named route, appending `query` as an urlencoded
    /// query string when it is not empty.
    pub fn uri<K, V>(&self, name: &str, query: &[(K, V)]) -> Result<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let route = self.find(name).ok_or_else(|| EchoError::RouteNotFound {
            name: name.to_string(),
        })?;

        if query.is_empty() {
            return Ok(route.path.clone());
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
            .finish();
        Ok(format!("{}?{}", route.path, query))
    }
}

/// `path` with capture names erased: `/a/{id}` and `/a/{name}` share a shape.
fn path_shape(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment.starts_with("{*") && segment.ends_with('}') {
                "{*}"
            } else if segment.starts_with('{') && segment.ends_with('}') {
                "{}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

impl<S> std::fmt::Debug for RouteTable<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.routes.iter()).finish()
    }
}

impl<S> Default for RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
