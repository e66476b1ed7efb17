// ============================================================================
// REACTIVITY - Subscribers / notifications
// ============================================================================
// Delivery is synchronous, in registration order, to the subscribers present
// when `publish` starts. Nothing is queued or replayed.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<E> = Rc<dyn Fn(&E)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Notifier<E> {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback<E>)>>,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback; it sees only events published from now on
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns false when the id was not (or no longer) registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    /// Deliver `event` to every current subscriber, in order
    pub fn publish(&self, event: &E) {
        // Snapshot so callbacks may (un)subscribe while we deliver
        let snapshot: Vec<Callback<E>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        for callback in snapshot {
            callback(event);
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Value + change notifications
pub struct ReactiveState<T> {
    value: RefCell<T>,
    changes: Notifier<T>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            changes: Notifier::new(),
        }
    }

    /// Clone of the current value
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store the value, then notify with a copy (no borrow held during delivery)
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value.clone();
        self.changes.publish(&new_value);
    }

    /// Notified after each `set`
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        self.changes.subscribe(callback)
    }
}
