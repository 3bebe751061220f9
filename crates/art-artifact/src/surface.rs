//! Renderer hand-off
//!
//! [`ArtifactSurface`] tells the rendering collaborator which renderer to use
//! and with what input. `code` artifacts are always handed off together with a
//! [`SandboxPolicy`] the renderer must enforce.

use crate::descriptor::{ArtifactDescriptor, ArtifactPayload};
use crate::kind::ArtifactKind;
use serde_json::Value;

static NO_PROPS: Value = Value::Null;

/// Privilege restrictions for untrusted HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxPolicy {
    /// Script execution inside the document
    pub allow_scripts: bool,
    /// Access to the hosting page's origin (storage, cookies)
    pub allow_same_origin: bool,
}

impl SandboxPolicy {
    /// Scripts allowed, host storage and cookies denied
    pub const RESTRICTED: Self = Self {
        allow_scripts: true,
        allow_same_origin: false,
    };

    /// Value for an iframe `sandbox` attribute
    #[must_use]
    pub fn sandbox_attribute(&self) -> String {
        let mut tokens = Vec::new();
        if self.allow_scripts {
            tokens.push("allow-scripts");
        }
        if self.allow_same_origin {
            tokens.push("allow-same-origin");
        }
        tokens.join(" ")
    }
}

impl Default for SandboxPolicy {
    fn default() -> Self {
        Self::RESTRICTED
    }
}

/// What the artifact panel hands to a renderer
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactSurface<'a> {
    /// Plot renderer input
    Plot { config: &'a Value },
    /// Calculator renderer input
    Calculator { config: &'a Value },
    /// Component to resolve and mount behind a render boundary
    Component {
        component_id: &'a str,
        props: &'a Value,
    },
    /// Untrusted HTML, rendered under `policy`
    Sandboxed {
        html: &'a str,
        policy: SandboxPolicy,
    },
    /// Raw markdown
    Markdown { text: &'a str },
    /// Image gallery
    Images { sources: &'a [String] },
    /// Nothing renderable for `kind`
    Empty { kind: ArtifactKind },
}

impl ArtifactSurface<'_> {
    /// Placeholder text for an empty surface
    #[must_use]
    pub fn empty_message(kind: ArtifactKind) -> &'static str {
        match kind {
            ArtifactKind::Plot => "No plot data available",
            ArtifactKind::Calculator => "No calculator data available",
            ArtifactKind::Code => "No HTML content available",
            ArtifactKind::Markdown => "No markdown content available",
            ArtifactKind::Images => "No images available",
            ArtifactKind::Component => "No component configuration available",
        }
    }
}

/// Source shown by the panel's code toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceView {
    /// Pretty-printed configuration
    Config(String),
    /// Raw HTML document
    Html(String),
}

impl ArtifactDescriptor {
    /// Renderer hand-off for this descriptor
    #[must_use]
    pub fn surface(&self) -> ArtifactSurface<'_> {
        if self.payload().is_empty() {
            return ArtifactSurface::Empty { kind: self.kind() };
        }
        match self.payload() {
            ArtifactPayload::Plot(config) => ArtifactSurface::Plot { config },
            ArtifactPayload::Calculator(config) => ArtifactSurface::Calculator { config },
            ArtifactPayload::Component(config) => {
                let id = config
                    .get("id")
                    .and_then(Value::as_str)
                    .or_else(|| self.template_id());
                match id {
                    Some(component_id) => ArtifactSurface::Component {
                        component_id,
                        props: config.get("props").unwrap_or(&NO_PROPS),
                    },
                    None => ArtifactSurface::Empty {
                        kind: ArtifactKind::Component,
                    },
                }
            }
            ArtifactPayload::Code(html) => ArtifactSurface::Sandboxed {
                html,
                policy: SandboxPolicy::RESTRICTED,
            },
            ArtifactPayload::Markdown(text) => ArtifactSurface::Markdown { text },
            ArtifactPayload::Images(sources) => ArtifactSurface::Images { sources },
        }
    }

    /// Source for the code toggle, if this kind offers one
    #[must_use]
    pub fn source_view(&self) -> Option<SourceView> {
        match self.payload() {
            ArtifactPayload::Plot(config)
            | ArtifactPayload::Calculator(config)
            | ArtifactPayload::Component(config) => serde_json::to_string_pretty(config)
                .ok()
                .map(SourceView::Config),
            ArtifactPayload::Code(html) if !html.is_empty() => Some(SourceView::Html(html.clone())),
            _ => None,
        }
    }
}
