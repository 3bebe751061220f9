//! Testing utilities for the artifact studio workspace
//!
//! Shared fixtures: the bundled template registry, descriptor builders and
//! loaders that count, fail or panic on demand.

#![allow(missing_docs)]

use art_artifact::{ArtifactDescriptor, ArtifactPayload, Origin, TemplateRef};
use art_components::{
    Component, ComponentCatalog, ComponentLoadError, ComponentLoader, ComponentRenderError,
    FnComponent, SharedComponent,
};
use art_registry::TemplateRegistry;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn builtin_registry() -> TemplateRegistry {
    TemplateRegistry::with_builtins().unwrap()
}

pub fn lesson_chart() -> ArtifactDescriptor {
    ArtifactDescriptor::new(
        "Monthly Sales",
        ArtifactPayload::Plot(json!({ "title": "Monthly Sales", "data": [] })),
        Origin::Lesson,
    )
    .with_template(TemplateRef::new("bar-chart").with_example("sales"))
}

pub fn chat_code(title: &str) -> ArtifactDescriptor {
    ArtifactDescriptor::code(title, "<button onclick=\"alert(1)\">Run</button>", Origin::Chat)
}

pub fn manual_notes(title: &str) -> ArtifactDescriptor {
    ArtifactDescriptor::markdown(title, "## Lesson notes", Origin::Manual)
}

pub fn component_artifact(component_id: &str, origin: Origin) -> ArtifactDescriptor {
    ArtifactDescriptor::new(
        component_id,
        ArtifactPayload::Component(json!({ "id": component_id, "props": {} })),
        origin,
    )
    .with_template(TemplateRef::new(component_id))
}

/// Component rendering fixed markup
pub fn static_component(markup: &str) -> SharedComponent {
    let markup = markup.to_string();
    FnComponent::shared(move |_| Ok(markup.clone()))
}

/// Component whose render always panics
pub struct PanickingComponent;

impl Component for PanickingComponent {
    fn render(&self, _props: &Value) -> Result<String, ComponentRenderError> {
        panic!("component render panicked")
    }
}

/// Loader that succeeds and counts its invocations
#[derive(Clone)]
pub struct CountingLoader {
    component: SharedComponent,
    calls: Arc<AtomicUsize>,
}

impl CountingLoader {
    pub fn new(component: SharedComponent) -> Self {
        Self {
            component,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_markup(markup: &str) -> Self {
        Self::new(static_component(markup))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn shared(&self) -> Arc<dyn ComponentLoader> {
        Arc::new(self.clone())
    }
}

#[async_trait::async_trait]
impl ComponentLoader for CountingLoader {
    async fn load(&self) -> Result<SharedComponent, ComponentLoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::clone(&self.component))
    }
}

/// Loader that always fails and counts its invocations
#[derive(Clone)]
pub struct FailingLoader {
    reason: String,
    calls: Arc<AtomicUsize>,
}

impl FailingLoader {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn shared(&self) -> Arc<dyn ComponentLoader> {
        Arc::new(self.clone())
    }
}

#[async_trait::async_trait]
impl ComponentLoader for FailingLoader {
    async fn load(&self) -> Result<SharedComponent, ComponentLoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ComponentLoadError::failed(self.reason.clone()))
    }
}

/// Catalog with one working widget per bundled component template plus
/// `broken-widget`, whose loader always fails
pub fn component_catalog() -> ComponentCatalog {
    let mut builder = ComponentCatalog::builder();
    for id in [
        "hello-react",
        "recharts-line",
        "recharts-bar",
        "recharts-area",
        "pv-diagram",
        "pv-diagram-canvas",
    ] {
        let markup = format!("<div data-component=\"{id}\"></div>");
        builder
            .register(id, CountingLoader::with_markup(&markup).shared())
            .unwrap();
    }
    builder
        .register("broken-widget", FailingLoader::new("chunk load error").shared())
        .unwrap();
    builder.build()
}
