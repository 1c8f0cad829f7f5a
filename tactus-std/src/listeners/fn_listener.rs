//! Closure listener for ad-hoc subscriptions.

use tactus_core::{FixedTickListener, LateTickListener, TickListener};

/// A listener that runs a zero-argument closure on every invocation.
///
/// Implements all three phase capabilities, so one value can be
/// subscribed wherever it is needed without a named listener type. Each
/// wrapped closure is its own identity: two `FnListener`s built from
/// the same closure are distinct listeners.
pub struct FnListener<F> {
    callback: F,
}

impl<F> FnListener<F> {
    /// Create a new closure listener.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F: Fn()> TickListener for FnListener<F> {
    fn on_tick(&self) {
        (self.callback)();
    }
}

impl<F: Fn()> LateTickListener for FnListener<F> {
    fn on_late_tick(&self) {
        (self.callback)();
    }
}

impl<F: Fn()> FixedTickListener for FnListener<F> {
    fn on_fixed_tick(&self) {
        (self.callback)();
    }
}
