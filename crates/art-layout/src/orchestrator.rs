//! Event loop tying the layout machine to its observers

use crate::bus::Subscription;
use crate::config::OrchestratorConfig;
use crate::error::ConfigError;
use crate::event::CenterEvent;
use crate::layout::{CenterLayout, Change, Transition};
use crate::stage::ArtifactStage;
use crate::visibility::{PanelVisibilityCoordinator, VisibilityDirective};
use art_components::ComponentResolver;
use serde::Serialize;

/// Outcome of handling one signal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrchestratorStep {
    /// Layout transition
    pub transition: Transition,
    /// Sidebar directive, for open transitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<VisibilityDirective>,
}

/// Consumer of center-panel signals
///
/// Each signal is processed to completion before the next: the layout
/// machine transitions first, then the visibility coordinator and the
/// artifact stage observe the transition.
#[derive(Debug)]
pub struct Orchestrator {
    subscription: Subscription<CenterEvent>,
    layout: CenterLayout,
    panels: PanelVisibilityCoordinator,
    stage: ArtifactStage,
}

impl Orchestrator {
    /// Create orchestrator
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(
        subscription: Subscription<CenterEvent>,
        resolver: ComponentResolver,
        config: &OrchestratorConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            subscription,
            layout: CenterLayout::with_default_split(config.split_ratio()?),
            panels: PanelVisibilityCoordinator::new(config.panels()),
            stage: ArtifactStage::new(resolver),
        })
    }

    /// Process one signal
    pub fn handle(&mut self, event: CenterEvent) -> OrchestratorStep {
        let transition = self.layout.dispatch(event);
        let directive = self.panels.observe(&transition);

        match transition.change {
            Change::Opened { .. } => {
                if let Some(artifact) = self.layout.state().current_artifact() {
                    self.stage.show(artifact);
                }
            }
            Change::Closed => self.stage.clear(),
            _ => {}
        }

        OrchestratorStep {
            transition,
            directive,
        }
    }

    /// Process every queued signal in order
    pub fn pump(&mut self) -> Vec<OrchestratorStep> {
        let mut steps = Vec::new();
        while let Some(event) = self.subscription.try_next() {
            steps.push(self.handle(event));
        }
        steps
    }

    /// Process signals until every bus handle is dropped
    ///
    /// Returns the number of signals handled.
    pub async fn run(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.subscription.recv().await {
            self.handle(event);
            handled += 1;
        }
        tracing::debug!(handled, "center event loop finished");
        handled
    }

    /// Layout machine
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &CenterLayout {
        &self.layout
    }

    /// Sidebar visibility
    #[inline]
    #[must_use]
    pub fn panels(&self) -> &PanelVisibilityCoordinator {
        &self.panels
    }

    /// Sidebar visibility for user toggles
    #[inline]
    pub fn panels_mut(&mut self) -> &mut PanelVisibilityCoordinator {
        &mut self.panels
    }

    /// Artifact stage
    #[inline]
    #[must_use]
    pub fn stage(&self) -> &ArtifactStage {
        &self.stage
    }

    /// Artifact stage for views and retries
    #[inline]
    pub fn stage_mut(&mut self) -> &mut ArtifactStage {
        &mut self.stage
    }
}
