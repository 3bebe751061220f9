//! Component registration
//!
//! [`ComponentCatalog`] maps component ids to their loaders. Like the template
//! registry it is built once and read-only afterwards.

use crate::component::{ComponentLoader, FnLoader, SharedComponent};
use crate::error::{CatalogError, ComponentLoadError};
use indexmap::IndexMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Builder collecting component registrations
#[derive(Default)]
pub struct ComponentCatalogBuilder {
    loaders: IndexMap<String, Arc<dyn ComponentLoader>>,
}

impl ComponentCatalogBuilder {
    /// Create empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loader under `id`
    ///
    /// # Errors
    /// - `CatalogError::EmptyId` for an empty id
    /// - `CatalogError::DuplicateComponent` if `id` is already registered
    pub fn register(
        &mut self,
        id: impl Into<String>,
        loader: Arc<dyn ComponentLoader>,
    ) -> Result<&mut Self, CatalogError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if self.loaders.contains_key(&id) {
            return Err(CatalogError::DuplicateComponent(id));
        }
        self.loaders.insert(id, loader);
        Ok(self)
    }

    /// Register an async closure as the loader for `id`
    ///
    /// # Errors
    /// See [`register`](Self::register).
    pub fn register_fn<F, Fut>(
        &mut self,
        id: impl Into<String>,
        f: F,
    ) -> Result<&mut Self, CatalogError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<SharedComponent, ComponentLoadError>> + Send + 'static,
    {
        self.register(id, Arc::new(FnLoader::new(f)))
    }

    /// Freeze into an immutable catalog
    #[must_use]
    pub fn build(self) -> ComponentCatalog {
        tracing::debug!(components = self.loaders.len(), "component catalog built");
        ComponentCatalog {
            loaders: Arc::new(self.loaders),
        }
    }
}

/// Immutable id → loader map
#[derive(Clone, Default)]
pub struct ComponentCatalog {
    loaders: Arc<IndexMap<String, Arc<dyn ComponentLoader>>>,
}

impl ComponentCatalog {
    /// Start a new registration pass
    #[inline]
    #[must_use]
    pub fn builder() -> ComponentCatalogBuilder {
        ComponentCatalogBuilder::new()
    }

    /// Loader registered under `id`
    #[inline]
    #[must_use]
    pub fn loader(&self, id: &str) -> Option<Arc<dyn ComponentLoader>> {
        self.loaders.get(id).cloned()
    }

    /// Check if `id` is registered
    #[inline]
    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.loaders.contains_key(id)
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.loaders.keys().map(String::as_str)
    }

    /// Number of registered components
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Check if catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl fmt::Debug for ComponentCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentCatalog")
            .field("ids", &self.loaders.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Debug for ComponentCatalogBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentCatalogBuilder")
            .field("ids", &self.loaders.keys().collect::<Vec<_>>())
            .finish()
    }
}
