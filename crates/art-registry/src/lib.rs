//! Artifact Template Registry
//!
//! Static catalog of artifact templates: id → category, default
//! configuration and named example configurations.
//!
//! # Core Concepts
//!
//! - [`TemplateEntry`]: Registration record and immutable registry entry
//! - [`Category`]: `plots`, `calculators`, `react`, `canvas` or any other label
//! - [`TemplateRegistry`]: Frozen id → template map, built once
//! - [`merge_example`]: Example-over-default configuration merge
//!
//! # Example
//!
//! ```rust
//! use art_registry::TemplateRegistry;
//!
//! let registry = TemplateRegistry::with_builtins()?;
//! let config = registry.resolve_config("bar-chart", Some("sales"))?;
//! assert_eq!(config["title"], "Monthly Sales");
//! # Ok::<(), art_registry::RegistryError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builtin;
mod error;
mod registry;
mod template;

pub use builtin::BUILTIN_DEFINITIONS;
pub use error::{RegistryError, RegistryResult};
pub use registry::{merge_example, TemplateRegistry, TemplateRegistryBuilder, DISPLAY_KEY};
pub use template::{Category, TemplateEntry, TemplateSummary};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
