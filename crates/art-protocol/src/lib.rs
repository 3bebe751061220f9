//! Artifact link protocol
//!
//! Lesson and chat content reference templates with links of the form
//! `artifact:<templateId>[:<exampleName>]`. This crate parses those links and
//! resolves them against a [`TemplateRegistry`](art_registry::TemplateRegistry)
//! into [`ArtifactDescriptor`](art_artifact::ArtifactDescriptor)s.
//!
//! # Example
//!
//! ```rust
//! use art_protocol::{ArtifactLinkResolver, LinkError};
//! use art_registry::TemplateRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = ArtifactLinkResolver::new(TemplateRegistry::with_builtins()?);
//! let chart = resolver.resolve("artifact:bar-chart:sales")?;
//! assert_eq!(chart.title(), "Monthly Sales");
//!
//! let err = resolver.resolve("https://example.com").unwrap_err();
//! assert!(matches!(err, LinkError::Parse(_)) && err.is_foreign());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

mod error;
mod link;
mod resolver;

pub use error::{LinkError, LinkResult, ProtocolParseError};
pub use link::{is_artifact_link, parse, ArtifactLink, SCHEME};
pub use resolver::{kind_for_category, ArtifactLinkResolver, MARKDOWN_KEY};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
