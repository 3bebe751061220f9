//! Component resolution and render isolation
//!
//! Component-backed artifacts name a widget by id. The widget's code is only
//! loaded when the artifact is first shown, and every widget is rendered behind
//! its own failure boundary.
//!
//! # Core Concepts
//!
//! - [`ComponentCatalog`]: Immutable id → [`ComponentLoader`] registrations
//! - [`ComponentResolver`]: Lazy, memoized loads with observable [`ComponentLoadState`]
//! - [`RenderBoundary`]: Turns load and render failures into a local fallback
//!
//! # Example
//!
//! ```rust
//! use art_components::{ComponentCatalog, ComponentLoadError, ComponentResolver, FnComponent};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut catalog = ComponentCatalog::builder();
//! catalog
//!     .register_fn("hello-react", || async {
//!         Ok::<_, ComponentLoadError>(FnComponent::shared(|_| Ok("<h1>Hello</h1>".into())))
//!     })
//!     .unwrap();
//!
//! let resolver = ComponentResolver::new(catalog.build());
//! let handle = resolver.resolve("hello-react").unwrap();
//! assert!(handle.settled().await.component().is_some());
//! # }
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

mod boundary;
mod catalog;
mod component;
mod error;
mod resolver;
mod state;

pub use boundary::{BoundaryView, RenderBoundary};
pub use catalog::{ComponentCatalog, ComponentCatalogBuilder};
pub use component::{Component, ComponentLoader, FnComponent, FnLoader, SharedComponent};
pub use error::{
    BoundaryError, CatalogError, ComponentLoadError, ComponentRenderError, ResolveError,
};
pub use resolver::{ComponentHandle, ComponentResolver};
pub use state::{ComponentLoadState, ComponentStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
