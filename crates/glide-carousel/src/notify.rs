#![forbid(unsafe_code)]

//! Notification registry: ordered move observers.
//!
//! Observers receive the committed index after every accepted move, once when
//! the carousel is built, and again whenever the responsive breakpoint flips,
//! so late or layout-sensitive observers can resynchronize without a
//! navigation action.
//!
//! # Invariants
//!
//! 1. Observers are invoked in registration order.
//! 2. All observers have run before the committing call returns.
//! 3. Observers live as long as the registry; there is no removal.

use tracing::debug_span;

/// Callback invoked with the newly committed index.
pub type MoveCallback = Box<dyn FnMut(usize)>;

/// Registration handle; also the observer's position in the call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(usize);

impl ObserverId {
    /// Zero-based registration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Ordered list of move observers.
#[derive(Default)]
pub struct NotificationRegistry {
    observers: Vec<MoveCallback>,
}

impl std::fmt::Debug for NotificationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl NotificationRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer.
    pub fn register(&mut self, callback: impl FnMut(usize) + 'static) -> ObserverId {
        let id = ObserverId(self.observers.len());
        self.observers.push(Box::new(callback));
        id
    }

    /// Invoke every observer with `index`, in registration order.
    pub fn notify(&mut self, index: usize) {
        if self.observers.is_empty() {
            return;
        }
        let _span = debug_span!("carousel.notify", observers = self.observers.len(), index)
            .entered();
        for observer in &mut self.observers {
            observer(index);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = NotificationRegistry::new();

        for tag in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            registry.register(move |index| log.borrow_mut().push((tag, index)));
        }
        registry.notify(4);

        assert_eq!(*log.borrow(), vec![("a", 4), ("b", 4), ("c", 4)]);
    }

    #[test]
    fn ids_follow_registration_order() {
        let mut registry = NotificationRegistry::new();
        let first = registry.register(|_| {});
        let second = registry.register(|_| {});
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert!(first < second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn stateful_observers_accumulate() {
        let seen = Rc::new(RefCell::new(0usize));
        let mut registry = NotificationRegistry::new();
        let mut calls = 0;
        let sink = Rc::clone(&seen);
        registry.register(move |_| {
            calls += 1;
            *sink.borrow_mut() = calls;
        });
        registry.notify(0);
        registry.notify(0);
        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn empty_registry_is_quiet() {
        let mut registry = NotificationRegistry::new();
        assert!(registry.is_empty());
        registry.notify(3);
        assert_eq!(format!("{registry:?}"), "NotificationRegistry { observers: 0 }");
    }
}
