use crate::di::Container;
use crate::scope::ScopeName;

/// Builder for constructing a dependency injection container
///
/// Use this to register services before handing the container to the application.
///
/// # Example
/// ```
/// use request_echo::ContainerBuilder;
///
/// struct Settings {
///     greeting: &'static str,
/// }
///
/// let container = ContainerBuilder::new()
///     .register(Settings { greeting: "hello" })
///     .build();
/// assert_eq!(container.resolve::<Settings>().unwrap().greeting, "hello");
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    /// Create a new builder for the `root` scope
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Create a new builder for a detached scope with the given name
    pub fn scoped(name: impl Into<ScopeName>) -> Self {
        Self {
            container: Container::named(name),
        }
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Build the container
    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
