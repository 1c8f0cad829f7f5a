//! Test helpers for exercising dispatchers and listeners.
//!
//! Used by the crate's own suites and public for downstream tests. The
//! helpers are single-threaded like everything else here: a [`Journal`]
//! is shared by cloning, not by locking.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tactus_core::{FixedTickListener, LateTickListener, TickListener};

/// Shared, ordered record of listener invocations.
///
/// Clones share one underlying record; hand one clone to each
/// [`RecordingListener`] and assert on [`entries`](Journal::entries)
/// afterwards.
#[derive(Clone, Debug, Default)]
pub struct Journal(Rc<RefCell<Vec<&'static str>>>);

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag to the record.
    pub fn record(&self, tag: &'static str) {
        self.0.borrow_mut().push(tag);
    }

    /// The recorded tags, in invocation order.
    pub fn entries(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }

    /// Drop all recorded tags.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Number of recorded tags.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// A listener for all three phases that records every invocation.
///
/// Each invocation of any phase appends the listener's tag to the
/// shared [`Journal`], bumps a per-listener counter, and then runs the
/// optional scripted action. The action is how reentrancy scenarios are
/// driven: capture the dispatcher (or a peer listener) in the closure
/// and mutate registrations or flip the gate from inside the pass.
/// The action must not recursively drive a pass that reaches this same
/// listener.
pub struct RecordingListener {
    tag: &'static str,
    journal: Journal,
    invocations: Cell<usize>,
    action: RefCell<Option<Box<dyn FnMut()>>>,
}

impl RecordingListener {
    /// Create a listener that records `tag` into `journal`.
    pub fn new(tag: &'static str, journal: &Journal) -> Self {
        Self {
            tag,
            journal: journal.clone(),
            invocations: Cell::new(0),
            action: RefCell::new(None),
        }
    }

    /// Create a listener that also runs `action` after each recording.
    pub fn with_action(
        tag: &'static str,
        journal: &Journal,
        action: impl FnMut() + 'static,
    ) -> Self {
        Self {
            tag,
            journal: journal.clone(),
            invocations: Cell::new(0),
            action: RefCell::new(Some(Box::new(action))),
        }
    }

    /// Total invocations across all phases.
    pub fn invocations(&self) -> usize {
        self.invocations.get()
    }

    fn touch(&self) {
        self.journal.record(self.tag);
        self.invocations.set(self.invocations.get() + 1);
        if let Some(action) = self.action.borrow_mut().as_mut() {
            action();
        }
    }
}

impl TickListener for RecordingListener {
    fn on_tick(&self) {
        self.touch();
    }
}

impl LateTickListener for RecordingListener {
    fn on_late_tick(&self) {
        self.touch();
    }
}

impl FixedTickListener for RecordingListener {
    fn on_fixed_tick(&self) {
        self.touch();
    }
}
