//! Artifact descriptors
//!
//! Provides [`ArtifactDescriptor`], the unit of content displayed in the
//! artifact panel. The kind is derived from the payload variant, so a
//! descriptor can never carry a payload that disagrees with its kind.

use crate::kind::{ArtifactKind, Origin};
use crate::signal::{ArtifactOpenSignal, SignalError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind-specific artifact content
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactPayload {
    /// Plot configuration, opaque to the core
    Plot(Value),
    /// Calculator configuration, opaque to the core
    Calculator(Value),
    /// HTML document string (untrusted)
    Code(String),
    /// Raw markdown text
    Markdown(String),
    /// Ordered image references
    Images(Vec<String>),
    /// Component configuration (`{ id, props }`)
    Component(Value),
}

impl ArtifactPayload {
    /// Kind carried by this payload
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Plot(_) => ArtifactKind::Plot,
            Self::Calculator(_) => ArtifactKind::Calculator,
            Self::Code(_) => ArtifactKind::Code,
            Self::Markdown(_) => ArtifactKind::Markdown,
            Self::Images(_) => ArtifactKind::Images,
            Self::Component(_) => ArtifactKind::Component,
        }
    }

    /// Payload used when a producer omits one
    #[must_use]
    pub fn empty(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Plot => Self::Plot(Value::Null),
            ArtifactKind::Calculator => Self::Calculator(Value::Null),
            ArtifactKind::Code => Self::Code(String::new()),
            ArtifactKind::Markdown => Self::Markdown(String::new()),
            ArtifactKind::Images => Self::Images(Vec::new()),
            ArtifactKind::Component => Self::Component(Value::Null),
        }
    }

    /// Build a payload of `kind` from a raw JSON value
    ///
    /// # Errors
    /// Returns [`SignalError::PayloadMismatch`] when the value shape does not
    /// fit the kind (e.g. a number for `code`).
    pub fn from_value(kind: ArtifactKind, value: Value) -> Result<Self, SignalError> {
        let mismatch = || SignalError::payload_mismatch(kind, expected_shape(kind));
        match (kind, value) {
            (_, Value::Null) => Ok(Self::empty(kind)),
            (ArtifactKind::Plot, value) => Ok(Self::Plot(value)),
            (ArtifactKind::Calculator, value) => Ok(Self::Calculator(value)),
            (ArtifactKind::Component, value) => Ok(Self::Component(value)),
            (ArtifactKind::Code, Value::String(html)) => Ok(Self::Code(html)),
            (ArtifactKind::Markdown, Value::String(text)) => Ok(Self::Markdown(text)),
            (ArtifactKind::Images, Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(src) => Ok(src),
                    _ => Err(mismatch()),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Images),
            _ => Err(mismatch()),
        }
    }

    /// Convert back into the raw JSON wire value
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Plot(config) | Self::Calculator(config) | Self::Component(config) => {
                config.clone()
            }
            Self::Code(text) | Self::Markdown(text) => Value::String(text.clone()),
            Self::Images(sources) => {
                Value::Array(sources.iter().cloned().map(Value::String).collect())
            }
        }
    }

    /// Whether there is nothing to render
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plot(config) | Self::Calculator(config) | Self::Component(config) => {
                config.is_null()
            }
            Self::Code(text) | Self::Markdown(text) => text.is_empty(),
            Self::Images(sources) => sources.is_empty(),
        }
    }
}

fn expected_shape(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Code | ArtifactKind::Markdown => "string",
        ArtifactKind::Images => "array of strings",
        ArtifactKind::Plot | ArtifactKind::Calculator | ArtifactKind::Component => "json value",
    }
}

/// Template provenance of a descriptor produced from a link
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRef {
    /// Template identifier
    pub template_id: String,
    /// Example name within the template
    pub example_id: Option<String>,
}

impl TemplateRef {
    /// Create reference to a template default configuration
    #[inline]
    #[must_use]
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            example_id: None,
        }
    }

    /// Reference a named example
    #[inline]
    #[must_use]
    pub fn with_example(mut self, example_id: impl Into<String>) -> Self {
        self.example_id = Some(example_id.into());
        self
    }
}

/// Unit of content displayed in the artifact panel
///
/// Serializes as the artifact-open signal
/// (`{kind, title, payload, origin, templateId?, exampleId?, tags?}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ArtifactOpenSignal", try_from = "ArtifactOpenSignal")]
pub struct ArtifactDescriptor {
    title: String,
    payload: ArtifactPayload,
    origin: Origin,
    template: Option<TemplateRef>,
    tags: Vec<String>,
}

impl ArtifactDescriptor {
    /// Title shown when a producer supplies none
    pub const FALLBACK_TITLE: &'static str = "Artifact";

    /// Create descriptor
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, payload: ArtifactPayload, origin: Origin) -> Self {
        Self {
            title: title.into(),
            payload,
            origin,
            template: None,
            tags: Vec::new(),
        }
    }

    /// Markdown descriptor (e.g. "open lesson in canvas")
    #[inline]
    #[must_use]
    pub fn markdown(title: impl Into<String>, text: impl Into<String>, origin: Origin) -> Self {
        Self::new(title, ArtifactPayload::Markdown(text.into()), origin)
    }

    /// Code descriptor carrying an HTML document
    #[inline]
    #[must_use]
    pub fn code(title: impl Into<String>, html: impl Into<String>, origin: Origin) -> Self {
        Self::new(title, ArtifactPayload::Code(html.into()), origin)
    }

    /// Attach template provenance
    #[inline]
    #[must_use]
    pub fn with_template(mut self, template: TemplateRef) -> Self {
        self.template = Some(template);
        self
    }

    /// Attach producer tags
    #[inline]
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Artifact kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        self.payload.kind()
    }

    /// Raw title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title for the panel toolbar, never empty
    #[inline]
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            Self::FALLBACK_TITLE
        } else {
            &self.title
        }
    }

    /// Kind-specific content
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &ArtifactPayload {
        &self.payload
    }

    /// Producer origin
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Template provenance, if produced from a link
    #[inline]
    #[must_use]
    pub fn template(&self) -> Option<&TemplateRef> {
        self.template.as_ref()
    }

    /// Template identifier, if produced from a link
    #[inline]
    #[must_use]
    pub fn template_id(&self) -> Option<&str> {
        self.template.as_ref().map(|t| t.template_id.as_str())
    }

    /// Example name, if produced from a link naming one
    #[inline]
    #[must_use]
    pub fn example_id(&self) -> Option<&str> {
        self.template.as_ref().and_then(|t| t.example_id.as_deref())
    }

    /// Producer tags
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl From<ArtifactDescriptor> for ArtifactOpenSignal {
    fn from(descriptor: ArtifactDescriptor) -> Self {
        let (template_id, example_id) = match descriptor.template {
            Some(t) => (Some(t.template_id), t.example_id),
            None => (None, None),
        };
        Self {
            kind: descriptor.payload.kind(),
            title: descriptor.title,
            payload: Some(descriptor.payload.to_value()),
            origin: descriptor.origin,
            template_id,
            example_id,
            tags: descriptor.tags,
        }
    }
}

impl TryFrom<ArtifactOpenSignal> for ArtifactDescriptor {
    type Error = SignalError;

    fn try_from(signal: ArtifactOpenSignal) -> Result<Self, Self::Error> {
        let payload = match signal.payload {
            Some(value) => ArtifactPayload::from_value(signal.kind, value)?,
            None => ArtifactPayload::empty(signal.kind),
        };
        let template = signal.template_id.map(|template_id| TemplateRef {
            template_id,
            example_id: signal.example_id,
        });
        Ok(Self {
            title: signal.title,
            payload,
            origin: signal.origin,
            template,
            tags: signal.tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn kind_follows_payload() {
        let d = ArtifactDescriptor::code("Demo", "<p>hi</p>", Origin::Chat);
        assert_eq!(d.kind(), ArtifactKind::Code);
        assert_eq!(d.origin(), Origin::Chat);
        assert!(d.template().is_none());
    }

    #[test]
    fn display_title_falls_back() {
        let d = ArtifactDescriptor::markdown("", "# notes", Origin::Lesson);
        assert_eq!(d.display_title(), "Artifact");
    }

    #[test]
    fn template_accessors() {
        let d = ArtifactDescriptor::new("Sales", ArtifactPayload::Plot(json!({})), Origin::Lesson)
            .with_template(TemplateRef::new("bar-chart").with_example("sales"));
        assert_eq!(d.template_id(), Some("bar-chart"));
        assert_eq!(d.example_id(), Some("sales"));
    }

    #[test]
    fn deserializes_open_signal() {
        let d: ArtifactDescriptor = serde_json::from_value(json!({
            "kind": "images",
            "title": "Diagrams",
            "payload": ["a.png", "b.png"],
            "origin": "chat",
            "tags": ["engines"]
        }))
        .unwrap();
        assert_eq!(
            d.payload(),
            &ArtifactPayload::Images(vec!["a.png".into(), "b.png".into()])
        );
        assert_eq!(d.tags(), ["engines".to_string()]);
    }

    #[test]
    fn missing_payload_becomes_empty() {
        let d: ArtifactDescriptor =
            serde_json::from_value(json!({ "kind": "plot", "title": "X", "origin": "lesson" }))
                .unwrap();
        assert!(d.payload().is_empty());
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        let result: Result<ArtifactDescriptor, _> =
            serde_json::from_value(json!({ "kind": "code", "title": "X", "payload": 42 }));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("payload mismatch"));
    }

    #[test]
    fn image_list_with_non_strings_is_rejected() {
        let err = ArtifactPayload::from_value(ArtifactKind::Images, json!(["a.png", 3]))
            .unwrap_err();
        assert!(matches!(err, SignalError::PayloadMismatch { .. }));
    }

    #[test]
    fn serializes_with_camel_case_template_fields() {
        let d = ArtifactDescriptor::new(
            "Curve",
            ArtifactPayload::Component(json!({ "id": "recharts-line" })),
            Origin::Lesson,
        )
        .with_template(TemplateRef::new("recharts-line"));
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["kind"], "component");
        assert_eq!(value["templateId"], "recharts-line");
        assert!(value.get("exampleId").is_none());
    }
}
