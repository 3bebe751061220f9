//! Artifact stage
//!
//! Holds the render boundary of the component artifact currently on display.
//! Other artifact kinds are rendered by their own collaborators and need no
//! boundary here.

use art_artifact::{ArtifactDescriptor, ArtifactSurface};
use art_components::{BoundaryView, ComponentResolver, RenderBoundary};

/// Mount point for the current component artifact
#[derive(Debug)]
pub struct ArtifactStage {
    resolver: ComponentResolver,
    mounted: Option<RenderBoundary>,
}

impl ArtifactStage {
    /// Create an empty stage
    #[inline]
    #[must_use]
    pub fn new(resolver: ComponentResolver) -> Self {
        Self {
            resolver,
            mounted: None,
        }
    }

    /// Component resolver backing the stage
    #[inline]
    #[must_use]
    pub fn resolver(&self) -> &ComponentResolver {
        &self.resolver
    }

    /// Show a newly opened artifact, replacing whatever was mounted
    ///
    /// Returns `true` if a boundary was mounted.
    pub fn show(&mut self, artifact: &ArtifactDescriptor) -> bool {
        self.mounted = match artifact.surface() {
            ArtifactSurface::Component {
                component_id,
                props,
            } => Some(RenderBoundary::mount(
                &self.resolver,
                component_id,
                props.clone(),
            )),
            _ => None,
        };
        self.mounted.is_some()
    }

    /// Unmount the current boundary
    ///
    /// An in-flight load keeps running; reopening the artifact reuses it.
    pub fn clear(&mut self) {
        self.mounted = None;
    }

    /// Mounted boundary, if any
    #[inline]
    #[must_use]
    pub fn boundary(&self) -> Option<&RenderBoundary> {
        self.mounted.as_ref()
    }

    /// Mounted boundary for retry actions
    #[inline]
    pub fn boundary_mut(&mut self) -> Option<&mut RenderBoundary> {
        self.mounted.as_mut()
    }

    /// Current view of the mounted boundary
    pub fn view(&mut self) -> Option<BoundaryView> {
        self.mounted.as_mut().map(RenderBoundary::view)
    }
}
