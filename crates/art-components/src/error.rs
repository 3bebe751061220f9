//! Error types for component resolution and rendering

/// Component loader failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentLoadError {
    /// Loader reported an error
    #[error("component load failed: {0}")]
    Failed(String),

    /// Loader panicked
    #[error("component loader panicked: {0}")]
    Panicked(String),
}

impl ComponentLoadError {
    /// Create load failure
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}

/// Component render failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentRenderError {
    /// Props do not fit the component
    #[error("invalid props: {0}")]
    InvalidProps(String),

    /// Component reported an error while rendering
    #[error("render failed: {0}")]
    Failed(String),

    /// Component panicked while rendering
    #[error("render panicked: {0}")]
    Panicked(String),
}

impl ComponentRenderError {
    /// Create render failure
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    /// Create invalid props error
    pub fn invalid_props(reason: impl Into<String>) -> Self {
        Self::InvalidProps(reason.into())
    }
}

/// Resolution failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No loader registered under this id
    #[error("component not found: '{0}'")]
    NotRegistered(String),

    /// Loads can only be spawned inside a tokio runtime
    #[error("component resolution requires a tokio runtime")]
    NoRuntime,
}

/// Component catalog registration failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Id registered twice
    #[error("duplicate component id: '{0}'")]
    DuplicateComponent(String),

    /// Empty id
    #[error("component id must not be empty")]
    EmptyId,
}

/// Failure shown in place of a component by its render boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundaryError {
    /// Component id is unknown
    #[error("component not found: '{id}'")]
    NotRegistered {
        /// Requested component id
        id: String,
    },

    /// Component failed to load
    #[error("component '{id}' failed to load: {source}")]
    Load {
        /// Component id
        id: String,
        /// Loader error
        source: ComponentLoadError,
    },

    /// Component failed to render
    #[error("component '{id}' failed to render: {source}")]
    Render {
        /// Component id
        id: String,
        /// Render error
        source: ComponentRenderError,
    },

    /// Boundary was mounted outside a runtime
    #[error("component '{id}' cannot load without a runtime")]
    NoRuntime {
        /// Component id
        id: String,
    },
}

impl BoundaryError {
    /// Whether a retry can change the outcome
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::NotRegistered { .. })
    }

    /// Component id the failure belongs to
    #[must_use]
    pub fn component_id(&self) -> &str {
        match self {
            Self::NotRegistered { id }
            | Self::Load { id, .. }
            | Self::Render { id, .. }
            | Self::NoRuntime { id } => id,
        }
    }

    pub(crate) fn from_resolve(id: &str, err: &ResolveError) -> Self {
        match err {
            ResolveError::NotRegistered(_) => Self::NotRegistered { id: id.to_string() },
            ResolveError::NoRuntime => Self::NoRuntime { id: id.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_final() {
        let err = BoundaryError::from_resolve(
            "pv-diagram",
            &ResolveError::NotRegistered("pv-diagram".into()),
        );
        assert_eq!(err.to_string(), "component not found: 'pv-diagram'");
        assert!(!err.is_retryable());
    }

    #[test]
    fn load_and_render_failures_are_retryable() {
        let load = BoundaryError::Load {
            id: "a".into(),
            source: ComponentLoadError::failed("network"),
        };
        let render = BoundaryError::Render {
            id: "b".into(),
            source: ComponentRenderError::failed("boom"),
        };
        assert!(load.is_retryable());
        assert!(render.is_retryable());
        assert_eq!(render.component_id(), "b");
        assert_eq!(
            load.to_string(),
            "component 'a' failed to load: component load failed: network"
        );
    }
}
