//! Application Bootstrap
//!
//! Builds the container scopes, the route table and the interceptor chain,
//! and hands out a ready [`axum::Router`].

use crate::controller::Controller;
use crate::di::{Container, HasContainer};
use crate::error::Result;
use crate::interceptor::{Interceptor, InterceptorLayer, RequestScopeInterceptor};
use crate::router::RouteTable;
use crate::scope::ScopeName;
use axum::Router;
use std::sync::Arc;

type RouteRegistrar = Box<dyn FnOnce(&Container, &mut RouteTable<AppState>) -> Result<()> + Send>;

/// Router state carrying the `http` scope container
#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// A bootstrapped application
///
/// # Example
///
/// ```rust,no_run
/// use request_echo::controller::GetController;
/// use request_echo::interceptor::LoggingInterceptor;
/// use request_echo::lifecycle::Application;
///
/// # async fn run() -> request_echo::Result<()> {
/// let app = Application::builder()
///     .interceptor(LoggingInterceptor)
///     .controller::<GetController>()
///     .build()?;
///
/// let router = app.router();
/// # let _ = router;
/// # Ok(())
/// # }
/// ```
pub struct Application {
    container: Arc<Container>,
    routes: RouteTable<AppState>,
    interceptors: InterceptorLayer,
}

impl Application {
    /// Create a new application builder
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    /// The `http` scope container shared by all requests
    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    pub fn routes(&self) -> &RouteTable<AppState> {
        &self.routes
    }

    /// Reverse-route a named route.
    pub fn uri<K, V>(&self, name: &str, query: &[(K, V)]) -> Result<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.routes.uri(name, query)
    }

    /// Build the router with the interceptor chain and state attached.
    pub fn router(&self) -> Router {
        self.routes
            .router()
            .layer(self.interceptors.clone())
            .with_state(AppState::new(Arc::clone(&self.container)))
    }
}

/// Builder for Application
pub struct ApplicationBuilder {
    container: Option<Container>,
    interceptors: Vec<Arc<dyn Interceptor>>,
    registrars: Vec<RouteRegistrar>,
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            container: None,
            interceptors: Vec::new(),
            registrars: Vec::new(),
        }
    }

    /// Set the root container. An empty `root` container is used otherwise.
    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Add an interceptor. Interceptors run in the order they are added,
    /// all of them outside the request scope.
    pub fn interceptor(mut self, interceptor: impl Interceptor) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Inject a controller from the `http` scope and register its routes.
    pub fn controller<C: Controller>(mut self) -> Self {
        self.registrars.push(Box::new(
            |container: &Container, table: &mut RouteTable<AppState>| {
                let controller = Arc::new(C::inject(container)?);
                controller.register_routes(table)
            },
        ));
        self
    }

    /// Build the application
    ///
    /// # Errors
    ///
    /// Returns an error if a controller cannot be injected or its routes
    /// conflict with ones already registered.
    pub fn build(self) -> Result<Application> {
        let root = Arc::new(self.container.unwrap_or_default());
        let http = Arc::new(root.open_scope(ScopeName::Http));

        let mut routes = RouteTable::new();
        for registrar in self.registrars {
            registrar(http.as_ref(), &mut routes)?;
        }

        let mut interceptors = self.interceptors;
        interceptors.push(Arc::new(RequestScopeInterceptor::new(Arc::clone(&http))));

        tracing::info!(
            routes = routes.len(),
            interceptors = interceptors.len(),
            scopes = ?http.scope_names(),
            "Application initialized"
        );

        Ok(Application {
            container: http,
            routes,
            interceptors: InterceptorLayer::new(interceptors),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::GetController;
    use crate::error::EchoError;

    #[test]
    fn test_build_registers_controller_routes() {
        let app = Application::builder()
            .controller::<GetController>()
            .build()
            .unwrap();

        assert_eq!(app.routes().len(), 3);
        assert_eq!(app.container().scope_names(), vec!["http", "root"]);
        assert_eq!(
            app.uri(GetController::QUERY_PARAMS, &[("a", "1"), ("b", "2")])
                .unwrap(),
            "/get/query-params?a=1&b=2"
        );
    }

    #[test]
    fn test_controller_registered_twice_conflicts() {
        let result = Application::builder()
            .controller::<GetController>()
            .controller::<GetController>()
            .build();
        assert!(matches!(result, Err(EchoError::RouteConflict { .. })));
    }

    #[test]
    fn test_root_container_is_parent_of_http_scope() {
        struct Marker(u8);
        let mut root = Container::new();
        root.register(Marker(3));

        let app = Application::builder().container(root).build().unwrap();
        assert_eq!(app.container().resolve::<Marker>().unwrap().0, 3);
        assert!(app.routes().is_empty());
    }
}
