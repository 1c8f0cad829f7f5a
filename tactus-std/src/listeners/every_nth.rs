//! Cadence adapter for listeners that should run on a subset of passes.

use std::cell::Cell;

use tactus_core::{FixedTickListener, LateTickListener, TactusError, TickListener};

/// A listener that forwards every `period`-th invocation to an inner
/// listener, starting with the `period`-th.
///
/// The classic frame-skip wrapper: `EveryNth::new(listener, 4)` runs
/// the inner listener on every fourth pass it participates in. One
/// counter is kept per adapter and advances on every invocation of any
/// phase, so an adapter subscribed to several phases counts them
/// together; wrap separately per phase for independent cadences.
pub struct EveryNth<L> {
    inner: L,
    period: u32,
    count: Cell<u32>,
}

impl<L> EveryNth<L> {
    /// Wrap `inner`, forwarding every `period`-th invocation.
    ///
    /// # Errors
    ///
    /// [`TactusError::ZeroPeriod`] if `period` is 0.
    pub fn new(inner: L, period: u32) -> Result<Self, TactusError> {
        if period == 0 {
            return Err(TactusError::ZeroPeriod);
        }
        Ok(Self {
            inner,
            period,
            count: Cell::new(0),
        })
    }

    fn due(&self) -> bool {
        let next = (self.count.get() + 1) % self.period;
        self.count.set(next);
        next == 0
    }
}

impl<L: TickListener> TickListener for EveryNth<L> {
    fn on_tick(&self) {
        if self.due() {
            self.inner.on_tick();
        }
    }
}

impl<L: LateTickListener> LateTickListener for EveryNth<L> {
    fn on_late_tick(&self) {
        if self.due() {
            self.inner.on_late_tick();
        }
    }
}

impl<L: FixedTickListener> FixedTickListener for EveryNth<L> {
    fn on_fixed_tick(&self) {
        if self.due() {
            self.inner.on_fixed_tick();
        }
    }
}
