//! Error types for the template registry

/// Template registry errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No template with this id
    #[error("template not found: '{0}'")]
    TemplateNotFound(String),

    /// Template exists but has no example with this name
    #[error("example '{example}' not found in template '{template}'")]
    ExampleNotFound { template: String, example: String },

    /// Template id registered twice
    #[error("duplicate template id: '{0}'")]
    DuplicateTemplate(String),

    /// Template definition is structurally invalid
    #[error("invalid template '{id}': {reason}")]
    InvalidTemplate { id: String, reason: String },

    /// Template definition could not be decoded
    #[error("invalid template definition in {source_name}: {source}")]
    Definition {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RegistryError {
    /// Create example-not-found error
    pub fn example_not_found(template: impl Into<String>, example: impl Into<String>) -> Self {
        Self::ExampleNotFound {
            template: template.into(),
            example: example.into(),
        }
    }

    /// Create invalid template error
    pub fn invalid_template(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create definition decode error
    pub fn definition(source_name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Definition {
            source_name: source_name.into(),
            source,
        }
    }

    /// Lookup failures are recoverable; the caller treats the link as inert
    #[inline]
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::TemplateNotFound(_) | Self::ExampleNotFound { .. })
    }
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = RegistryError::TemplateNotFound("pie-chart".to_string());
        assert_eq!(err.to_string(), "template not found: 'pie-chart'");
        assert!(err.is_lookup_failure());
    }

    #[test]
    fn example_not_found_display() {
        let err = RegistryError::example_not_found("bar-chart", "weekly");
        assert_eq!(
            err.to_string(),
            "example 'weekly' not found in template 'bar-chart'"
        );
        assert!(err.is_lookup_failure());
    }

    #[test]
    fn registration_errors_are_not_lookup_failures() {
        let err = RegistryError::DuplicateTemplate("bar-chart".to_string());
        assert!(!err.is_lookup_failure());
    }
}
