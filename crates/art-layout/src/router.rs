//! Link clicks to open signals

use crate::bus::EventBus;
use crate::event::CenterEvent;
use art_artifact::Origin;
use art_protocol::{is_artifact_link, ArtifactLinkResolver, LinkError};

/// Result of following an href
#[derive(Debug)]
pub enum LinkOutcome {
    /// Not an `artifact:` link; normal link handling applies
    Ignored,
    /// Open signal published
    Opened {
        /// Subscribers that received the signal
        receivers: usize,
    },
    /// Broken or unresolvable artifact link; nothing published
    Rejected(LinkError),
}

impl LinkOutcome {
    /// Whether an open signal went out
    #[inline]
    #[must_use]
    pub fn is_opened(&self) -> bool {
        matches!(self, Self::Opened { .. })
    }
}

/// Resolves clicked links and publishes the resulting artifacts
#[derive(Debug, Clone)]
pub struct LinkRouter {
    resolver: ArtifactLinkResolver,
    bus: EventBus<CenterEvent>,
}

impl LinkRouter {
    /// Create router publishing on `bus`
    #[inline]
    #[must_use]
    pub fn new(resolver: ArtifactLinkResolver, bus: EventBus<CenterEvent>) -> Self {
        Self { resolver, bus }
    }

    /// Follow a link clicked in lesson content
    pub fn follow(&self, href: &str) -> LinkOutcome {
        self.follow_with_origin(href, Origin::Lesson)
    }

    /// Follow a link clicked in content of the given origin
    pub fn follow_with_origin(&self, href: &str, origin: Origin) -> LinkOutcome {
        if !is_artifact_link(href) {
            return LinkOutcome::Ignored;
        }
        match self.resolver.resolve_with_origin(href, origin) {
            Ok(descriptor) => LinkOutcome::Opened {
                receivers: self.bus.publish(CenterEvent::open(descriptor)),
            },
            Err(err) => {
                tracing::warn!(href, error = %err, "artifact link rejected");
                LinkOutcome::Rejected(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use art_registry::{TemplateEntry, TemplateRegistry};
    use serde_json::json;

    fn router(bus: &EventBus<CenterEvent>) -> LinkRouter {
        let mut builder = TemplateRegistry::builder();
        builder
            .register(TemplateEntry::new("line-chart", "plots", json!({ "title": "Line" })))
            .unwrap();
        LinkRouter::new(ArtifactLinkResolver::new(builder.build()), bus.clone())
    }

    #[test]
    fn publishes_resolved_link() {
        let bus = EventBus::new();
        let mut sub = bus.subscribe();
        let outcome = router(&bus).follow("artifact:line-chart");
        assert!(matches!(outcome, LinkOutcome::Opened { receivers: 1 }));
        let Some(CenterEvent::Open { descriptor }) = sub.try_next() else {
            panic!("expected open signal");
        };
        assert_eq!(descriptor.origin(), Origin::Lesson);
    }

    #[test]
    fn foreign_and_broken_links_publish_nothing() {
        let bus = EventBus::new();
        let mut sub = bus.subscribe();
        let router = router(&bus);
        assert!(matches!(router.follow("https://example.com"), LinkOutcome::Ignored));
        assert!(matches!(router.follow("artifact:"), LinkOutcome::Rejected(_)));
        assert!(matches!(
            router.follow("artifact:line-chart:weekly"),
            LinkOutcome::Rejected(LinkError::Registry(_))
        ));
        assert!(sub.try_next().is_none());
        assert_eq!(bus.events_published(), 0);
    }
}
