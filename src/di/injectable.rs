use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be built from the DI container
///
/// Controllers implement this so the application can construct them once at
/// startup and share them across requests behind an `Arc`.
///
/// # Example
/// ```
/// use request_echo::{Container, Injectable, Result};
/// use std::sync::Arc;
///
/// struct Greeting(String);
///
/// struct GreetingController {
///     greeting: Arc<Greeting>,
/// }
///
/// impl Injectable for GreetingController {
///     fn inject(container: &Container) -> Result<Self> {
///         Ok(Self {
///             greeting: container.resolve::<Greeting>()?,
///         })
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container
    /// or any of its parent scopes.
    fn inject(container: &Container) -> Result<Self>;
}
