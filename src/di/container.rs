use crate::error::{EchoError, Result};
use crate::scope::ScopeName;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// Thread-safe dependency injection container.
///
/// Containers form a chain of named scopes. The root container is named
/// `root`; [`Container::open_scope`] creates a child whose lookups fall back
/// to its parent when a service is not registered locally.
pub struct Container {
    scope: ScopeName,
    parent: Option<Arc<Container>>,
    services: DashMap<TypeId, ServiceEntry>,
}

impl Clone for Container {
    fn clone(&self) -> Self {
        Self {
            scope: self.scope.clone(),
            parent: self.parent.clone(),
            services: self.services.clone(),
        }
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("scopes", &self.scope_names())
            .field("services", &self.services.len())
            .finish()
    }
}

#[derive(Clone)]
struct ServiceEntry {
    instance: Arc<dyn Any + Send + Sync>,
}

impl Container {
    pub fn new() -> Self {
        Self::named(ScopeName::Root)
    }

    /// Create a container for a scope with no parent.
    pub fn named(scope: impl Into<ScopeName>) -> Self {
        Self {
            scope: scope.into(),
            parent: None,
            services: DashMap::new(),
        }
    }

    /// Open a child scope. Services registered on the child shadow the
    /// parent's; everything else resolves through the parent chain.
    pub fn open_scope(self: &Arc<Self>, scope: impl Into<ScopeName>) -> Container {
        let scope = scope.into();
        tracing::trace!(parent = %self.scope, %scope, "opening scope");
        Self {
            scope,
            parent: Some(Arc::clone(self)),
            services: DashMap::new(),
        }
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        let type_id = TypeId::of::<T>();
        let entry = ServiceEntry {
            instance: Arc::new(instance),
        };
        self.services.insert(type_id, entry);
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let requested_type_id = TypeId::of::<T>();
        let Some(entry) = self.lookup(&requested_type_id) else {
            return Err(EchoError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            });
        };
        entry
            .instance
            .downcast::<T>()
            .map_err(|_| EchoError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    fn lookup(&self, type_id: &TypeId) -> Option<ServiceEntry> {
        if let Some(entry) = self.services.get(type_id) {
            return Some(entry.value().clone());
        }
        self.parent.as_ref().and_then(|parent| parent.lookup(type_id))
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.lookup(&TypeId::of::<T>()).is_some()
    }

    /// Name of this scope.
    pub fn scope_name(&self) -> &ScopeName {
        &self.scope
    }

    /// Names of all active scopes, innermost first.
    pub fn scope_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut current = Some(self);
        while let Some(container) = current {
            names.push(container.scope.to_string());
            current = container.parent.as_deref();
        }
        names
    }

    pub fn parent(&self) -> Option<&Arc<Container>> {
        self.parent.as_ref()
    }

    /// Number of services registered directly on this scope.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
