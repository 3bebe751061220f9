//! Render isolation
//!
//! A [`RenderBoundary`] wraps one component id plus its props. Whatever goes
//! wrong behind it (missing component, failed load, render error, render
//! panic) is turned into a [`BoundaryView::Failed`] for that boundary alone.

use crate::error::{BoundaryError, ComponentRenderError, ResolveError};
use crate::resolver::{panic_message, ComponentHandle, ComponentResolver};
use crate::state::ComponentLoadState;
use serde::Serialize;
use serde_json::Value;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// What a boundary currently shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BoundaryView {
    /// Component not loaded yet
    Loading {
        /// Component id
        id: String,
    },
    /// Rendered markup
    Content {
        /// Component id
        id: String,
        /// Render output
        markup: String,
    },
    /// Fallback in place of the component
    Failed {
        /// Component id
        id: String,
        /// Failure message
        message: String,
        /// Whether a retry action is offered
        retryable: bool,
    },
}

impl BoundaryView {
    /// Whether the boundary shows its fallback
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug)]
enum Source {
    Resolved(ComponentHandle),
    Unresolved(ResolveError),
}

/// Failure-isolating wrapper around one component
#[derive(Debug)]
pub struct RenderBoundary {
    id: String,
    props: Value,
    resolver: ComponentResolver,
    source: Source,
    render_failure: Option<ComponentRenderError>,
}

impl RenderBoundary {
    /// Mount a boundary, resolving (and if needed loading) the component
    #[must_use]
    pub fn mount(resolver: &ComponentResolver, id: impl Into<String>, props: Value) -> Self {
        let id = id.into();
        let source = match resolver.resolve(&id) {
            Ok(handle) => Source::Resolved(handle),
            Err(err) => {
                tracing::warn!(component = %id, error = %err, "component unavailable");
                Source::Unresolved(err)
            }
        };
        Self {
            id,
            props,
            resolver: resolver.clone(),
            source,
            render_failure: None,
        }
    }

    /// Component id
    #[inline]
    #[must_use]
    pub fn component_id(&self) -> &str {
        &self.id
    }

    /// Props passed to the component
    #[inline]
    #[must_use]
    pub fn props(&self) -> &Value {
        &self.props
    }

    /// Current failure, if the boundary shows its fallback
    #[must_use]
    pub fn error(&self) -> Option<BoundaryError> {
        if let Some(source) = &self.render_failure {
            return Some(BoundaryError::Render {
                id: self.id.clone(),
                source: source.clone(),
            });
        }
        match &self.source {
            Source::Unresolved(err) => Some(BoundaryError::from_resolve(&self.id, err)),
            Source::Resolved(handle) => handle.state().error().map(|source| BoundaryError::Load {
                id: self.id.clone(),
                source: source.clone(),
            }),
        }
    }

    /// Render the current view
    ///
    /// A render failure is remembered until [`retry`](Self::retry), so a
    /// broken component is not re-invoked on every view.
    pub fn view(&mut self) -> BoundaryView {
        if self.render_failure.is_none() {
            if let Source::Resolved(handle) = &self.source {
                match handle.state() {
                    ComponentLoadState::Unloaded | ComponentLoadState::Loading => {
                        return BoundaryView::Loading {
                            id: self.id.clone(),
                        };
                    }
                    ComponentLoadState::Ready(component) => {
                        let outcome =
                            catch_unwind(AssertUnwindSafe(|| component.render(&self.props)));
                        match outcome {
                            Ok(Ok(markup)) => {
                                return BoundaryView::Content {
                                    id: self.id.clone(),
                                    markup,
                                };
                            }
                            Ok(Err(err)) => self.render_failure = Some(err),
                            Err(panic) => {
                                self.render_failure = Some(ComponentRenderError::Panicked(
                                    panic_message(panic.as_ref()),
                                ));
                            }
                        }
                        if let Some(err) = &self.render_failure {
                            tracing::warn!(
                                component = %self.id,
                                error = %err,
                                "component render failed"
                            );
                        }
                    }
                    ComponentLoadState::Failed(_) => {}
                }
            }
        }

        match self.error() {
            Some(err) => BoundaryView::Failed {
                id: self.id.clone(),
                message: err.to_string(),
                retryable: err.is_retryable(),
            },
            None => BoundaryView::Loading {
                id: self.id.clone(),
            },
        }
    }

    /// Retry after a failure
    ///
    /// A render failure is cleared so the next view renders again; a load
    /// failure asks the resolver to reload. Returns `true` if anything was
    /// reset. Other boundaries are unaffected.
    pub fn retry(&mut self) -> bool {
        if self.render_failure.take().is_some() {
            tracing::info!(component = %self.id, "retrying component render");
            return true;
        }
        match &self.source {
            Source::Resolved(_) => self.resolver.retry(&self.id).unwrap_or(false),
            Source::Unresolved(ResolveError::NoRuntime) => match self.resolver.resolve(&self.id) {
                Ok(handle) => {
                    self.source = Source::Resolved(handle);
                    true
                }
                Err(_) => false,
            },
            Source::Unresolved(ResolveError::NotRegistered(_)) => false,
        }
    }
}
