//! Component and loader contracts

use crate::error::{ComponentLoadError, ComponentRenderError};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Instantiable widget produced by a loader
///
/// Rendering turns props into markup for the artifact panel. It must not
/// touch state outside the component; the render boundary may invoke it
/// again after a retry.
pub trait Component: Send + Sync {
    /// Render props into markup
    ///
    /// # Errors
    /// Returns `ComponentRenderError` when the props cannot be rendered.
    fn render(&self, props: &Value) -> Result<String, ComponentRenderError>;
}

impl fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Component")
    }
}

/// Shared component instance
pub type SharedComponent = Arc<dyn Component>;

/// Deferred async factory for one component
#[async_trait::async_trait]
pub trait ComponentLoader: Send + Sync {
    /// Load the component
    ///
    /// Invoked at most once per resolver unless a retry is requested.
    async fn load(&self) -> Result<SharedComponent, ComponentLoadError>;
}

/// Adapter turning an async closure into a [`ComponentLoader`]
pub struct FnLoader<F>(F);

impl<F> FnLoader<F> {
    /// Wrap a closure
    #[inline]
    #[must_use]
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait::async_trait]
impl<F, Fut> ComponentLoader for FnLoader<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<SharedComponent, ComponentLoadError>> + Send,
{
    async fn load(&self) -> Result<SharedComponent, ComponentLoadError> {
        (self.0)().await
    }
}

/// Adapter turning a render closure into a [`Component`]
pub struct FnComponent<F>(F);

impl<F> FnComponent<F>
where
    F: Fn(&Value) -> Result<String, ComponentRenderError> + Send + Sync + 'static,
{
    /// Wrap a render closure as a shared component
    #[must_use]
    pub fn shared(f: F) -> SharedComponent {
        Arc::new(Self(f))
    }
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&Value) -> Result<String, ComponentRenderError> + Send + Sync,
{
    fn render(&self, props: &Value) -> Result<String, ComponentRenderError> {
        (self.0)(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn fn_loader_produces_component() {
        let loader = FnLoader::new(|| async {
            Ok::<_, ComponentLoadError>(FnComponent::shared(|props| {
                Ok(format!("<p>{}</p>", props["text"]))
            }))
        });
        let component = loader.load().await.unwrap();
        assert_eq!(component.render(&json!({ "text": 1 })).unwrap(), "<p>1</p>");
    }
}
