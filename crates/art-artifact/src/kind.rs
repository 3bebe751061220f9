//! Artifact kinds and producer origins

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Renderable artifact kind
///
/// Selects which renderer collaborator receives the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Interactive chart (configuration passed to the plot renderer)
    Plot,
    /// Formula calculator
    Calculator,
    /// Untrusted HTML document, rendered in a sandbox
    Code,
    /// Raw markdown text
    Markdown,
    /// Ordered image references
    Images,
    /// Dynamically resolved component
    Component,
}

impl ArtifactKind {
    /// All kinds in declaration order
    pub const ALL: [ArtifactKind; 6] = [
        Self::Plot,
        Self::Calculator,
        Self::Code,
        Self::Markdown,
        Self::Images,
        Self::Component,
    ];

    /// Wire name of this kind
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plot => "plot",
            Self::Calculator => "calculator",
            Self::Code => "code",
            Self::Markdown => "markdown",
            Self::Images => "images",
            Self::Component => "component",
        }
    }

    /// Whether the artifact panel offers a source toggle for this kind
    #[inline]
    #[must_use]
    pub fn has_source_view(&self) -> bool {
        matches!(
            self,
            Self::Plot | Self::Calculator | Self::Code | Self::Component
        )
    }
}

impl Display for ArtifactKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown kind names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown artifact kind: '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for ArtifactKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Producer category of an artifact-open request
///
/// Only drives panel visibility policy. Unknown labels deserialize as
/// [`Origin::Manual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Opened from lesson content (link or "open in canvas")
    Lesson,
    /// Produced by the AI chat panel
    Chat,
    /// Toolbar or any other producer
    #[default]
    #[serde(other)]
    Manual,
}

impl Origin {
    /// Map a free-form label to an origin, defaulting to `Manual`
    #[inline]
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "lesson" => Self::Lesson,
            "chat" => Self::Chat,
            _ => Self::Manual,
        }
    }

    /// Wire name of this origin
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lesson => "lesson",
            Self::Chat => "chat",
            Self::Manual => "manual",
        }
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in ArtifactKind::ALL {
            assert_eq!(kind.as_str().parse::<ArtifactKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_rejects_legacy_names() {
        let err = "react-component".parse::<ArtifactKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown artifact kind: 'react-component'");
    }

    #[test]
    fn source_view_kinds() {
        assert!(ArtifactKind::Plot.has_source_view());
        assert!(ArtifactKind::Code.has_source_view());
        assert!(!ArtifactKind::Markdown.has_source_view());
        assert!(!ArtifactKind::Images.has_source_view());
    }

    #[test]
    fn unknown_origin_is_manual() {
        let origin: Origin = serde_json::from_str("\"toolbar\"").unwrap();
        assert_eq!(origin, Origin::Manual);
        assert_eq!(Origin::from_label("sidebar"), Origin::Manual);
    }

    #[test]
    fn known_origins_deserialize() {
        let lesson: Origin = serde_json::from_str("\"lesson\"").unwrap();
        let chat: Origin = serde_json::from_str("\"chat\"").unwrap();
        assert_eq!(lesson, Origin::Lesson);
        assert_eq!(chat, Origin::Chat);
    }
}
