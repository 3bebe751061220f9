//! Artifact link syntax
//!
//! `artifact:<templateId>` or `artifact:<templateId>:<exampleName>`, where each
//! segment is a non-empty run of characters other than `:`.

use crate::error::ProtocolParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Scheme prefix, including the separator
pub const SCHEME: &str = "artifact:";

const SEPARATOR: char = ':';

/// Parsed artifact link
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactLink {
    /// Template id (first segment)
    pub template_id: String,
    /// Optional example name (second segment)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_name: Option<String>,
}

impl ArtifactLink {
    /// Create link to a template's default configuration
    #[inline]
    #[must_use]
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            example_name: None,
        }
    }

    /// With example name
    #[inline]
    #[must_use]
    pub fn with_example(mut self, example_name: impl Into<String>) -> Self {
        self.example_name = Some(example_name.into());
        self
    }

    /// Parse an href
    ///
    /// # Errors
    /// - `NotArtifactLink` if `href` does not start with `artifact:`
    /// - `MissingTemplateId` for a bare `artifact:`
    /// - `EmptySegment` for `artifact::x` or `artifact:x:`
    /// - `TooManySegments` for three or more segments
    pub fn parse(href: &str) -> Result<Self, ProtocolParseError> {
        let rest = href
            .strip_prefix(SCHEME)
            .ok_or_else(|| ProtocolParseError::NotArtifactLink(href.to_string()))?;
        if rest.is_empty() {
            return Err(ProtocolParseError::MissingTemplateId);
        }

        let segments: Vec<&str> = rest.split(SEPARATOR).collect();
        if segments.len() > 2 {
            return Err(ProtocolParseError::TooManySegments {
                count: segments.len(),
            });
        }
        if let Some(position) = segments.iter().position(|s| s.is_empty()) {
            return Err(ProtocolParseError::EmptySegment { position });
        }

        Ok(Self {
            template_id: segments[0].to_string(),
            example_name: segments.get(1).map(|s| (*s).to_string()),
        })
    }

    /// Example name, if any
    #[inline]
    #[must_use]
    pub fn example(&self) -> Option<&str> {
        self.example_name.as_deref()
    }
}

impl FromStr for ArtifactLink {
    type Err = ProtocolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for ArtifactLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}", self.template_id)?;
        if let Some(example) = &self.example_name {
            write!(f, "{SEPARATOR}{example}")?;
        }
        Ok(())
    }
}

/// Whether `href` uses the artifact scheme (well-formed or not)
#[inline]
#[must_use]
pub fn is_artifact_link(href: &str) -> bool {
    href.starts_with(SCHEME)
}

/// Parse an href into an [`ArtifactLink`]
///
/// # Errors
/// See [`ArtifactLink::parse`].
#[inline]
pub fn parse(href: &str) -> Result<ArtifactLink, ProtocolParseError> {
    ArtifactLink::parse(href)
}
