//! Shared enabled/disabled gate.

use std::cell::Cell;
use std::rc::Rc;

/// A handle for toggling dispatch on and off at runtime.
///
/// Clones share one underlying flag: a dispatcher keeps one handle and
/// passes it live into each dispatch pass, while host glue or a listener
/// may hold another clone and flip it mid-pass. Dispatch checks the gate
/// between steps, so a flip takes effect before the next listener runs;
/// the listener currently executing always finishes.
///
/// The flag lives in a [`Cell`] behind an [`Rc`], which ties the handle
/// to the crate's single-threaded model.
#[derive(Debug, Clone)]
pub struct EnabledHandle(Rc<Cell<bool>>);

impl EnabledHandle {
    /// Create a new handle with the given initial state.
    pub fn new(enabled: bool) -> Self {
        Self(Rc::new(Cell::new(enabled)))
    }

    /// Check whether the gate is currently open.
    pub fn is_enabled(&self) -> bool {
        self.0.get()
    }

    /// Open the gate.
    pub fn enable(&self) {
        self.0.set(true);
    }

    /// Close the gate.
    pub fn disable(&self) {
        self.0.set(false);
    }

    /// Toggle the gate, returning the new state.
    pub fn toggle(&self) -> bool {
        let next = !self.0.get();
        self.0.set(next);
        next
    }

    /// Set the gate's state.
    pub fn set(&self, enabled: bool) {
        self.0.set(enabled);
    }
}

impl Default for EnabledHandle {
    fn default() -> Self {
        Self::new(true)
    }
}
