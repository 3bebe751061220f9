//! Link resolution against the template registry

use crate::error::LinkResult;
use crate::link::ArtifactLink;
use art_artifact::{ArtifactDescriptor, ArtifactKind, ArtifactPayload, Origin, TemplateRef};
use art_registry::{Category, TemplateEntry, TemplateRegistry};
use serde_json::Value;

/// Config key read as the text of markdown-backed templates
pub const MARKDOWN_KEY: &str = "markdown";

/// Artifact kind rendered for a template category
#[must_use]
pub fn kind_for_category(category: &Category) -> ArtifactKind {
    match category {
        Category::Plots => ArtifactKind::Plot,
        Category::Calculators => ArtifactKind::Calculator,
        Category::React | Category::Canvas => ArtifactKind::Component,
        Category::Other(_) => ArtifactKind::Markdown,
    }
}

/// Resolves `artifact:` links into descriptors
#[derive(Debug, Clone)]
pub struct ArtifactLinkResolver {
    registry: TemplateRegistry,
}

impl ArtifactLinkResolver {
    /// Create resolver over a registry
    #[inline]
    #[must_use]
    pub fn new(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Get the backing registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Resolve a link found in lesson content
    ///
    /// # Errors
    /// Parse errors for malformed hrefs; `TemplateNotFound`/`ExampleNotFound`
    /// from the registry.
    pub fn resolve(&self, href: &str) -> LinkResult<ArtifactDescriptor> {
        self.resolve_with_origin(href, Origin::Lesson)
    }

    /// Resolve a link with an explicit producer origin
    ///
    /// # Errors
    /// See [`resolve`](Self::resolve).
    pub fn resolve_with_origin(
        &self,
        href: &str,
        origin: Origin,
    ) -> LinkResult<ArtifactDescriptor> {
        let link = ArtifactLink::parse(href)?;
        self.resolve_link(&link, origin)
    }

    /// Resolve an already parsed link
    ///
    /// # Errors
    /// `TemplateNotFound`/`ExampleNotFound` from the registry.
    pub fn resolve_link(
        &self,
        link: &ArtifactLink,
        origin: Origin,
    ) -> LinkResult<ArtifactDescriptor> {
        let template = self.registry.require(&link.template_id)?;
        let config = self
            .registry
            .resolve_config(&link.template_id, link.example())?;

        let title = title_for(template, link.example().and_then(|e| template.example(e)));
        let payload = payload_for(&template.category, config);

        let mut provenance = TemplateRef::new(template.id.clone());
        if let Some(example) = link.example() {
            provenance = provenance.with_example(example);
        }

        tracing::debug!(link = %link, kind = %payload.kind(), "artifact link resolved");
        Ok(ArtifactDescriptor::new(title, payload, origin).with_template(provenance))
    }
}

/// Example title, then template name, then the raw id
fn title_for(template: &TemplateEntry, example: Option<&Value>) -> String {
    example
        .and_then(|e| e.get("title"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| template.name.clone())
        .unwrap_or_else(|| template.id.clone())
}

fn payload_for(category: &Category, config: Value) -> ArtifactPayload {
    match kind_for_category(category) {
        ArtifactKind::Plot => ArtifactPayload::Plot(config),
        ArtifactKind::Calculator => ArtifactPayload::Calculator(config),
        ArtifactKind::Component => ArtifactPayload::Component(config),
        ArtifactKind::Markdown | ArtifactKind::Code | ArtifactKind::Images => {
            ArtifactPayload::Markdown(
                config
                    .get(MARKDOWN_KEY)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LinkError, ProtocolParseError};
    use art_registry::{RegistryError, TemplateEntry};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resolver() -> ArtifactLinkResolver {
        let mut builder = TemplateRegistry::builder();
        builder
            .register(
                TemplateEntry::new("bar-chart", "plots", json!({ "title": "Bar Chart Example" }))
                    .with_name("Bar Chart")
                    .with_example("sales", json!({ "title": "Monthly Sales" }))
                    .with_example("untitled", json!({ "data": [] })),
            )
            .unwrap()
            .register(TemplateEntry::new("hello-react", "react", json!({ "id": "hello-react" })))
            .unwrap()
            .register(TemplateEntry::new(
                "otto-notes",
                "notes",
                json!({ "markdown": "## Otto cycle" }),
            ))
            .unwrap();
        ArtifactLinkResolver::new(builder.build())
    }

    #[test]
    fn category_kinds() {
        assert_eq!(kind_for_category(&Category::Plots), ArtifactKind::Plot);
        assert_eq!(kind_for_category(&Category::Calculators), ArtifactKind::Calculator);
        assert_eq!(kind_for_category(&Category::Canvas), ArtifactKind::Component);
        assert_eq!(
            kind_for_category(&Category::Other("slides".into())),
            ArtifactKind::Markdown
        );
    }

    #[test]
    fn example_title_wins() {
        let d = resolver().resolve("artifact:bar-chart:sales").unwrap();
        assert_eq!(d.title(), "Monthly Sales");
        assert_eq!(d.kind(), ArtifactKind::Plot);
        assert_eq!(d.origin(), Origin::Lesson);
        assert_eq!(d.template_id(), Some("bar-chart"));
        assert_eq!(d.example_id(), Some("sales"));
    }

    #[test]
    fn template_name_then_id() {
        let r = resolver();
        assert_eq!(r.resolve("artifact:bar-chart:untitled").unwrap().title(), "Bar Chart");
        assert_eq!(r.resolve("artifact:hello-react").unwrap().title(), "hello-react");
    }

    #[test]
    fn other_category_is_markdown() {
        let d = resolver().resolve("artifact:otto-notes").unwrap();
        assert_eq!(d.payload(), &ArtifactPayload::Markdown("## Otto cycle".into()));
    }

    #[test]
    fn chat_origin() {
        let d = resolver()
            .resolve_with_origin("artifact:hello-react", Origin::Chat)
            .unwrap();
        assert_eq!(d.origin(), Origin::Chat);
        assert_eq!(d.kind(), ArtifactKind::Component);
    }

    #[test]
    fn lookup_failures() {
        let r = resolver();
        assert!(matches!(
            r.resolve("artifact:pie-chart"),
            Err(LinkError::Registry(RegistryError::TemplateNotFound(_)))
        ));
        assert!(matches!(
            r.resolve("artifact:bar-chart:weekly"),
            Err(LinkError::Registry(RegistryError::ExampleNotFound { .. }))
        ));
        assert!(matches!(
            r.resolve("artifact:a:b:c"),
            Err(LinkError::Parse(ProtocolParseError::TooManySegments { count: 3 }))
        ));
    }
}
