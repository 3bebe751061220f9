//! Artifact data model
//!
//! Typed descriptors for content shown in the center artifact panel.
//!
//! # Core Concepts
//!
//! - [`ArtifactDescriptor`]: Title, payload, origin and template provenance
//! - [`ArtifactPayload`]: Kind-specific content; the kind is derived from it
//! - [`Origin`]: Producer category driving panel visibility
//! - [`ArtifactOpenSignal`]: Wire form of an artifact-open request
//! - [`ArtifactSurface`]: Renderer hand-off, including the sandbox contract
//!
//! # Example
//!
//! ```rust
//! use art_artifact::{ArtifactDescriptor, ArtifactKind, Origin};
//!
//! let notes = ArtifactDescriptor::markdown("Otto cycle", "## Four strokes", Origin::Lesson);
//! assert_eq!(notes.kind(), ArtifactKind::Markdown);
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

mod descriptor;
mod kind;
mod signal;
mod surface;

pub use descriptor::{ArtifactDescriptor, ArtifactPayload, TemplateRef};
pub use kind::{ArtifactKind, Origin, UnknownKind};
pub use signal::{ArtifactOpenSignal, SignalError};
pub use surface::{ArtifactSurface, SandboxPolicy, SourceView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
