//! Artifact-open signal wire type

use crate::kind::{ArtifactKind, Origin};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw artifact-open request as emitted by producers
///
/// Missing `origin` and unknown origin labels both map to `manual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactOpenSignal {
    /// Requested kind
    pub kind: ArtifactKind,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Kind-specific payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Producer category
    #[serde(default)]
    pub origin: Origin,
    /// Template identifier (link-produced artifacts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Example name (link-produced artifacts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_id: Option<String>,
    /// Free-form producer tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Errors converting a signal into a descriptor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// Payload shape does not fit the declared kind
    #[error("payload mismatch for kind '{kind}': expected {expected}")]
    PayloadMismatch {
        kind: ArtifactKind,
        expected: &'static str,
    },
}

impl SignalError {
    /// Create payload mismatch error
    #[inline]
    #[must_use]
    pub fn payload_mismatch(kind: ArtifactKind, expected: &'static str) -> Self {
        Self::PayloadMismatch { kind, expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_defaults() {
        let signal: ArtifactOpenSignal = serde_json::from_str(r#"{"kind":"markdown"}"#).unwrap();
        assert_eq!(signal.origin, Origin::Manual);
        assert!(signal.title.is_empty());
        assert!(signal.payload.is_none());
    }

    #[test]
    fn signal_error_display() {
        let err = SignalError::payload_mismatch(ArtifactKind::Code, "string");
        assert_eq!(
            err.to_string(),
            "payload mismatch for kind 'code': expected string"
        );
    }
}
