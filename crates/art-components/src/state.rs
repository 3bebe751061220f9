//! Per-component load state

use crate::component::SharedComponent;
use crate::error::ComponentLoadError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Load state of one component id
///
/// Moves `Unloaded → Loading → Ready | Failed`; only an explicit retry moves
/// `Failed` back to `Loading`.
#[derive(Clone, Default)]
pub enum ComponentLoadState {
    /// Never requested
    #[default]
    Unloaded,
    /// Loader in flight
    Loading,
    /// Loaded component
    Ready(SharedComponent),
    /// Loader failed
    Failed(ComponentLoadError),
}

impl ComponentLoadState {
    /// Payload-free summary
    #[must_use]
    pub fn status(&self) -> ComponentStatus {
        match self {
            Self::Unloaded => ComponentStatus::Unloaded,
            Self::Loading => ComponentStatus::Loading,
            Self::Ready(_) => ComponentStatus::Ready,
            Self::Failed(_) => ComponentStatus::Failed,
        }
    }

    /// Whether the load has finished, either way
    #[inline]
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    /// Loaded component, if ready
    #[must_use]
    pub fn component(&self) -> Option<&SharedComponent> {
        match self {
            Self::Ready(component) => Some(component),
            _ => None,
        }
    }

    /// Load error, if failed
    #[must_use]
    pub fn error(&self) -> Option<&ComponentLoadError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Debug for ComponentLoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unloaded => f.write_str("Unloaded"),
            Self::Loading => f.write_str("Loading"),
            Self::Ready(_) => f.write_str("Ready(..)"),
            Self::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}

/// Load status without the component or error payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    /// Never requested
    Unloaded,
    /// Loader in flight
    Loading,
    /// Loaded
    Ready,
    /// Loader failed
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_states() {
        assert!(!ComponentLoadState::Unloaded.is_settled());
        assert!(!ComponentLoadState::Loading.is_settled());
        let failed = ComponentLoadState::Failed(ComponentLoadError::failed("x"));
        assert!(failed.is_settled());
        assert_eq!(failed.status(), ComponentStatus::Failed);
        assert_eq!(format!("{failed:?}"), "Failed(Failed(\"x\"))");
    }
}
