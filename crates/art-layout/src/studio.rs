//! Composition root

use crate::bus::EventBus;
use crate::config::OrchestratorConfig;
use crate::error::OrchestratorError;
use crate::event::CenterEvent;
use crate::orchestrator::{Orchestrator, OrchestratorStep};
use crate::router::{LinkOutcome, LinkRouter};
use art_components::{ComponentCatalog, ComponentResolver};
use art_protocol::ArtifactLinkResolver;
use art_registry::TemplateRegistry;

/// Wired-up artifact orchestration core
///
/// Owns the bus and hands clones of it to the link router and any other
/// producer obtained through [`bus`](Self::bus).
#[derive(Debug)]
pub struct ArtifactStudio {
    bus: EventBus<CenterEvent>,
    router: LinkRouter,
    orchestrator: Orchestrator,
}

impl ArtifactStudio {
    /// Wire the core from its registries
    ///
    /// # Errors
    /// Returns `OrchestratorError::Config` for an invalid configuration.
    pub fn new(
        config: &OrchestratorConfig,
        templates: TemplateRegistry,
        components: ComponentCatalog,
    ) -> Result<Self, OrchestratorError> {
        let bus = EventBus::new();
        let orchestrator = Orchestrator::new(
            bus.subscribe(),
            ComponentResolver::new(components),
            config,
        )?;
        let router = LinkRouter::new(ArtifactLinkResolver::new(templates), bus.clone());
        tracing::debug!("artifact studio wired");
        Ok(Self {
            bus,
            router,
            orchestrator,
        })
    }

    /// Wire the core with the bundled template catalog
    ///
    /// # Errors
    /// Returns an error if the configuration or the bundled catalog is invalid.
    pub fn with_builtins(
        config: &OrchestratorConfig,
        components: ComponentCatalog,
    ) -> Result<Self, OrchestratorError> {
        Self::new(config, TemplateRegistry::with_builtins()?, components)
    }

    /// Bus handle for producers
    #[inline]
    #[must_use]
    pub fn bus(&self) -> &EventBus<CenterEvent> {
        &self.bus
    }

    /// Link router
    #[inline]
    #[must_use]
    pub fn router(&self) -> &LinkRouter {
        &self.router
    }

    /// Orchestrator
    #[inline]
    #[must_use]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Orchestrator for user actions
    #[inline]
    pub fn orchestrator_mut(&mut self) -> &mut Orchestrator {
        &mut self.orchestrator
    }

    /// Publish a signal and process everything queued
    pub fn send(&mut self, event: CenterEvent) -> Vec<OrchestratorStep> {
        self.bus.publish(event);
        self.orchestrator.pump()
    }

    /// Follow a lesson link and process the result
    ///
    /// The steps are empty unless the outcome is `Opened`.
    pub fn follow(&mut self, href: &str) -> (LinkOutcome, Vec<OrchestratorStep>) {
        let outcome = self.router.follow(href);
        (outcome, self.orchestrator.pump())
    }
}
