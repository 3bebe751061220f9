//! Error types for link parsing and resolution

use art_registry::RegistryError;

/// Malformed `artifact:` link
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolParseError {
    /// String does not use the `artifact:` scheme
    #[error("not an artifact link: '{0}'")]
    NotArtifactLink(String),

    /// Nothing after the scheme
    #[error("artifact link has no template id")]
    MissingTemplateId,

    /// More than `<templateId>:<exampleName>`
    #[error("artifact link has {count} segments, expected at most 2")]
    TooManySegments {
        /// Number of segments found after the scheme
        count: usize,
    },

    /// A segment between separators is empty
    #[error("artifact link has an empty segment at position {position}")]
    EmptySegment {
        /// Zero-based segment index
        position: usize,
    },
}

impl ProtocolParseError {
    /// Whether the input was a protocol link at all
    ///
    /// Non-protocol strings are left to normal link handling; only the other
    /// variants describe a broken `artifact:` link.
    #[inline]
    #[must_use]
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::NotArtifactLink(_))
    }
}

/// Link resolution failure
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Link could not be parsed
    #[error(transparent)]
    Parse(#[from] ProtocolParseError),

    /// Template or example lookup failed
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl LinkError {
    /// Whether the href should be handed back to normal link handling
    #[inline]
    #[must_use]
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Parse(e) if e.is_foreign())
    }
}

/// Result type alias for link operations
pub type LinkResult<T> = Result<T, LinkError>;
