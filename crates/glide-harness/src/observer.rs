#![forbid(unsafe_code)]

//! Shared log for move observers.

use std::cell::RefCell;
use std::rc::Rc;

/// Collects the indices a carousel publishes.
///
/// Clones share the same log, so one handle can be moved into an observer
/// closure while the test keeps another.
#[derive(Debug, Clone, Default)]
pub struct ObserverLog {
    seen: Rc<RefCell<Vec<usize>>>,
}

impl ObserverLog {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An observer closure appending to this log.
    pub fn recorder(&self) -> impl FnMut(usize) + 'static {
        let seen = Rc::clone(&self.seen);
        move |index| seen.borrow_mut().push(index)
    }

    /// Indices received so far.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.seen.borrow().clone()
    }

    /// Most recent index.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.seen.borrow().last().copied()
    }

    /// Number of notifications received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    /// Whether nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }

    /// Drop everything received so far.
    pub fn clear(&self) {
        self.seen.borrow_mut().clear();
    }
}
