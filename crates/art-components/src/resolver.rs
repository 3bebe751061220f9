//! Lazy, memoized component resolution
//!
//! [`ComponentResolver::resolve`] returns immediately with a
//! [`ComponentHandle`]. The first resolution of an id spawns its loader on the
//! current tokio runtime; every later resolution observes the same load state
//! through a `watch` channel instead of loading again.

use crate::catalog::ComponentCatalog;
use crate::component::ComponentLoader;
use crate::error::{ComponentLoadError, ResolveError};
use crate::state::{ComponentLoadState, ComponentStatus};
use dashmap::DashMap;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Load state cell of one component id
#[derive(Debug)]
struct Slot {
    state: watch::Sender<ComponentLoadState>,
    loads: AtomicUsize,
}

impl Slot {
    fn new() -> Self {
        let (state, _) = watch::channel(ComponentLoadState::Unloaded);
        Self {
            state,
            loads: AtomicUsize::new(0),
        }
    }

    /// Atomically move `from` states to `Loading`; true if this call did it
    fn begin_load(&self, from: fn(&ComponentLoadState) -> bool) -> bool {
        self.state.send_if_modified(|state| {
            if from(state) {
                *state = ComponentLoadState::Loading;
                true
            } else {
                false
            }
        })
    }
}

#[derive(Debug)]
struct ResolverInner {
    catalog: ComponentCatalog,
    slots: DashMap<String, Arc<Slot>>,
}

/// Component resolver with a shared per-id load cache
///
/// Cheap to clone; clones share the cache.
#[derive(Debug, Clone)]
pub struct ComponentResolver {
    inner: Arc<ResolverInner>,
}

impl ComponentResolver {
    /// Create resolver over a catalog
    #[must_use]
    pub fn new(catalog: ComponentCatalog) -> Self {
        Self {
            inner: Arc::new(ResolverInner {
                catalog,
                slots: DashMap::new(),
            }),
        }
    }

    /// Get the backing catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.inner.catalog
    }

    /// Resolve a component, starting its load on first use
    ///
    /// # Errors
    /// - `ResolveError::NotRegistered` if no loader exists for `id`
    /// - `ResolveError::NoRuntime` when called outside a tokio runtime; no
    ///   state is touched in that case
    pub fn resolve(&self, id: &str) -> Result<ComponentHandle, ResolveError> {
        let loader = self
            .inner
            .catalog
            .loader(id)
            .ok_or_else(|| ResolveError::NotRegistered(id.to_string()))?;
        let runtime = Handle::try_current().map_err(|_| ResolveError::NoRuntime)?;

        let slot = self.slot(id);
        if slot.begin_load(|s| matches!(s, ComponentLoadState::Unloaded)) {
            spawn_load(&runtime, id.to_string(), Arc::clone(&slot), loader);
        }

        Ok(ComponentHandle {
            id: id.to_string(),
            receiver: slot.state.subscribe(),
        })
    }

    /// Re-run a failed load
    ///
    /// Returns `true` if a new load was started. Any state other than
    /// `Failed` is left alone.
    ///
    /// # Errors
    /// Same as [`resolve`](Self::resolve).
    pub fn retry(&self, id: &str) -> Result<bool, ResolveError> {
        let loader = self
            .inner
            .catalog
            .loader(id)
            .ok_or_else(|| ResolveError::NotRegistered(id.to_string()))?;
        let runtime = Handle::try_current().map_err(|_| ResolveError::NoRuntime)?;

        let Some(slot) = self.inner.slots.get(id).map(|s| Arc::clone(s.value())) else {
            return Ok(false);
        };
        if !slot.begin_load(|s| matches!(s, ComponentLoadState::Failed(_))) {
            return Ok(false);
        }
        tracing::info!(component = id, "retrying component load");
        spawn_load(&runtime, id.to_string(), slot, loader);
        Ok(true)
    }

    /// Current load state without starting a load
    #[must_use]
    pub fn state(&self, id: &str) -> ComponentLoadState {
        self.inner
            .slots
            .get(id)
            .map(|slot| slot.state.borrow().clone())
            .unwrap_or_default()
    }

    /// Current load status without starting a load
    #[must_use]
    pub fn status(&self, id: &str) -> ComponentStatus {
        self.state(id).status()
    }

    /// Number of times the loader for `id` has been invoked
    #[must_use]
    pub fn load_count(&self, id: &str) -> usize {
        self.inner
            .slots
            .get(id)
            .map_or(0, |slot| slot.loads.load(Ordering::Acquire))
    }

    fn slot(&self, id: &str) -> Arc<Slot> {
        let entry = self
            .inner
            .slots
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Slot::new()));
        Arc::clone(entry.value())
    }
}

fn spawn_load(runtime: &Handle, id: String, slot: Arc<Slot>, loader: Arc<dyn ComponentLoader>) {
    slot.loads.fetch_add(1, Ordering::AcqRel);
    tracing::debug!(component = %id, "component load started");
    runtime.spawn(async move {
        let next = match AssertUnwindSafe(loader.load()).catch_unwind().await {
            Ok(Ok(component)) => {
                tracing::info!(component = %id, "component loaded");
                ComponentLoadState::Ready(component)
            }
            Ok(Err(err)) => {
                tracing::warn!(component = %id, error = %err, "component load failed");
                ComponentLoadState::Failed(err)
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                tracing::warn!(component = %id, panic = %message, "component loader panicked");
                ComponentLoadState::Failed(ComponentLoadError::Panicked(message))
            }
        };
        slot.state.send_replace(next);
    });
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Observer of one component's load state
#[derive(Debug, Clone)]
pub struct ComponentHandle {
    id: String,
    receiver: watch::Receiver<ComponentLoadState>,
}

impl ComponentHandle {
    /// Component id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current load state
    #[must_use]
    pub fn state(&self) -> ComponentLoadState {
        self.receiver.borrow().clone()
    }

    /// Current load status
    #[must_use]
    pub fn status(&self) -> ComponentStatus {
        self.receiver.borrow().status()
    }

    /// Fresh receiver for state changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ComponentLoadState> {
        self.receiver.clone()
    }

    /// Wait for the next state change
    ///
    /// Returns `false` once no further change can happen.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }

    /// Wait until the load is `Ready` or `Failed`
    pub async fn settled(&self) -> ComponentLoadState {
        let mut receiver = self.receiver.clone();
        if let Ok(state) = receiver.wait_for(ComponentLoadState::is_settled).await {
            return state.clone();
        }
        let state = receiver.borrow().clone();
        state
    }
}
