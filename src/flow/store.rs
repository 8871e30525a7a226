//! Observable state container.
//!
//! The store owns the current state of a [`Reducer`], applies it once per
//! dispatched action and notifies subscribers after the new state has been
//! committed. Dispatches are serialized by the state mutex; listeners are
//! invoked with no lock held so they may read the store or dispatch again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::reducer::Reducer;

/// Callback invoked with the committed state after each dispatch.
pub type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Store<R: Reducer> {
    state: Mutex<Arc<R::State>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener<R::State>)>>,
    next_subscription: AtomicU64,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the reducer's initial state.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store preloaded with `state`.
    pub fn with_state(state: R::State) -> Self {
        Self {
            state: Mutex::new(Arc::new(state)),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Arc<R::State> {
        Arc::clone(&self.state.lock())
    }

    /// Apply `action` to the current state, commit the result and notify
    /// every subscriber in subscription order.
    ///
    /// Subscribers are notified even when the action leaves the state
    /// unchanged.
    pub fn dispatch(&self, action: R::Action) -> Arc<R::State> {
        let next = {
            let mut guard = self.state.lock();
            let current = std::mem::take(&mut *guard);
            let next = Arc::new(R::reduce(Arc::unwrap_or_clone(current), action));
            *guard = Arc::clone(&next);
            next
        };

        let listeners: Vec<Listener<R::State>> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        tracing::trace!(listeners = listeners.len(), "Notifying subscribers");
        for listener in listeners {
            listener(&next);
        }

        next
    }

    /// Register a listener called after every dispatch.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        tracing::debug!(subscription = id.0, "Subscriber added");
        id
    }

    /// Remove a listener. Returns `false` if it was already removed.
    ///
    /// A dispatch already in progress still notifies the removed listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        let removed = listeners.len() != before;
        if removed {
            tracing::debug!(subscription = id.0, "Subscriber removed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().len()
    }
}
