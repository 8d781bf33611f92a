//! Observer registration for progress change notifications.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use kinetips_core::{ProgressChanged, SubscriptionId};
use tracing::warn;

/// Callback invoked after each progress write.
pub type ProgressObserver = Arc<dyn Fn(&ProgressChanged) + Send + Sync>;

/// List of registered observers.
///
/// Observers are called synchronously, outside the registry lock, so a
/// callback may re-query the manager or change its own registration.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: AtomicU64,
    observers: Mutex<Vec<(SubscriptionId, ProgressObserver)>>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ProgressChanged) + Send + Sync + 'static,
    {
        let id = SubscriptionId::from_raw(self.next_id.fetch_add(1, Ordering::Relaxed));
        match self.observers.lock() {
            Ok(mut guard) => guard.push((id, Arc::new(callback))),
            Err(poisoned) => poisoned.into_inner().push((id, Arc::new(callback))),
        }
        id
    }

    /// Remove a callback. Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut guard = match self.observers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = guard.len();
        guard.retain(|(sub, _)| *sub != id);
        guard.len() != before
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        match self.observers.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `event` to every registered callback.
    pub fn notify(&self, event: &ProgressChanged) {
        let snapshot: Vec<ProgressObserver> = match self.observers.lock() {
            Ok(guard) => guard.iter().map(|(_, cb)| Arc::clone(cb)).collect(),
            Err(poisoned) => {
                warn!("Observer registry lock poisoned; delivering anyway");
                poisoned.into_inner().iter().map(|(_, cb)| Arc::clone(cb)).collect()
            }
        };
        for callback in snapshot {
            callback(event);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}
