//! Center panel orchestration
//!
//! Signals from lesson links, chat output and toolbar buttons travel over an
//! [`EventBus`] to the [`Orchestrator`], which drives the [`CenterLayout`]
//! state machine and lets the [`PanelVisibilityCoordinator`] and
//! [`ArtifactStage`] react to every transition.
//!
//! # Example
//!
//! ```rust
//! use art_artifact::{ArtifactDescriptor, Origin};
//! use art_layout::{CenterEvent, CenterLayout, LayoutMode};
//!
//! let mut layout = CenterLayout::new();
//! let notes = ArtifactDescriptor::markdown("Otto cycle", "## Four strokes", Origin::Lesson);
//! layout.dispatch(CenterEvent::open(notes));
//! assert_eq!(layout.mode(), LayoutMode::LessonArtifact);
//! assert_eq!(layout.state().split_ratio().map(|s| s.lesson()), Some(40));
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod bus;
pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod orchestrator;
pub mod router;
pub mod stage;
pub mod studio;
pub mod telemetry;
pub mod visibility;

pub use bus::{EventBus, Subscription};
pub use config::OrchestratorConfig;
pub use error::{ConfigError, OrchestratorError};
pub use event::{CenterEvent, LessonId};
pub use layout::{
    allowed_transitions, CenterLayout, Change, IgnoreReason, LayoutMode, LayoutSnapshot,
    LayoutState, SplitRatio, Transition,
};
pub use orchestrator::{Orchestrator, OrchestratorStep};
pub use router::{LinkOutcome, LinkRouter};
pub use stage::ArtifactStage;
pub use studio::ArtifactStudio;
pub use telemetry::{init_tracing, LogFormat};
pub use visibility::{Panel, PanelVisibility, PanelVisibilityCoordinator, VisibilityDirective};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
