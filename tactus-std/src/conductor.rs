//! # Conductor
//!
//! [`Conductor`] composes three [`Roster`]s, one per phase, behind a
//! single shared [`EnabledHandle`]. Registration, queries and
//! per-listener enabling are pure delegation to the matching phase's
//! roster; the [`FrameSink`] implementation is what the host pumps once
//! per frame or fixed step.
//!
//! The gate is global: closing it stops in-progress and future passes
//! of all three phases until reopened. The phases are otherwise fully
//! independent; no ordering holds across them beyond the order in which
//! the host fires the drive calls.
//!
//! A listener that wants to reach its conductor mid-pass (to
//! unsubscribe itself or subscribe a peer) captures an
//! [`Rc`]`<Conductor>` or a [`std::rc::Weak`] to it; a listener that
//! only flips the gate captures an [`EnabledHandle`] clone instead.

use std::rc::Rc;

use tactus_core::{
    EnabledHandle, FixedTickListener, FrameSink, LateTickListener, TickListener,
};
use tracing::{debug, trace};

use crate::roster::Roster;

/// Three-phase frame dispatcher.
///
/// Construct one per host context; the gate starts open. All methods
/// take `&self` and are safe to call from inside a listener callback of
/// any phase.
#[derive(Debug, Default)]
pub struct Conductor {
    tick: Roster<dyn TickListener>,
    late_tick: Roster<dyn LateTickListener>,
    fixed_tick: Roster<dyn FixedTickListener>,
    enabled: EnabledHandle,
}

impl Conductor {
    /// Create a conductor with empty rosters and an open gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the gate: passes of every phase run again.
    pub fn enable(&self) {
        debug!("dispatch enabled");
        self.enabled.enable();
    }

    /// Close the gate: every phase's in-progress and future passes stop.
    ///
    /// Cooperative, not preemptive: a listener already executing
    /// finishes, the next entry is not visited.
    pub fn disable(&self) {
        debug!("dispatch disabled");
        self.enabled.disable();
    }

    /// Whether the gate is currently open.
    pub fn is_enabled(&self) -> bool {
        self.enabled.is_enabled()
    }

    /// A clone of the shared gate.
    pub fn enabled_handle(&self) -> EnabledHandle {
        self.enabled.clone()
    }

    // ========================================================================
    // Tick phase
    // ========================================================================

    /// Subscribe a listener to the tick phase.
    pub fn subscribe_to_tick(&self, listener: Rc<dyn TickListener>) {
        debug!(phase = "tick", "subscribe listener");
        self.tick.subscribe(listener);
    }

    /// Unsubscribe a listener from the tick phase.
    pub fn unsubscribe_from_tick(&self, listener: &(dyn TickListener + 'static)) {
        debug!(phase = "tick", "unsubscribe listener");
        self.tick.unsubscribe(listener);
    }

    /// Whether the listener is subscribed to the tick phase.
    pub fn is_subscribed_to_tick(&self, listener: &(dyn TickListener + 'static)) -> bool {
        self.tick.is_subscribed(listener)
    }

    /// Set the listener's local enabled flag in the tick phase.
    pub fn set_enabled_for_tick(&self, listener: &(dyn TickListener + 'static), enabled: bool) {
        debug!(phase = "tick", enabled, "set listener enabled");
        self.tick.set_enabled(listener, enabled);
    }

    /// Whether the listener is subscribed and enabled in the tick phase.
    pub fn is_enabled_for_tick(&self, listener: &(dyn TickListener + 'static)) -> bool {
        self.tick.is_enabled_for(listener)
    }

    // ========================================================================
    // Late-tick phase
    // ========================================================================

    /// Subscribe a listener to the late-tick phase.
    pub fn subscribe_to_late_tick(&self, listener: Rc<dyn LateTickListener>) {
        debug!(phase = "late_tick", "subscribe listener");
        self.late_tick.subscribe(listener);
    }

    /// Unsubscribe a listener from the late-tick phase.
    pub fn unsubscribe_from_late_tick(&self, listener: &(dyn LateTickListener + 'static)) {
        debug!(phase = "late_tick", "unsubscribe listener");
        self.late_tick.unsubscribe(listener);
    }

    /// Whether the listener is subscribed to the late-tick phase.
    pub fn is_subscribed_to_late_tick(&self, listener: &(dyn LateTickListener + 'static)) -> bool {
        self.late_tick.is_subscribed(listener)
    }

    /// Set the listener's local enabled flag in the late-tick phase.
    pub fn set_enabled_for_late_tick(
        &self,
        listener: &(dyn LateTickListener + 'static),
        enabled: bool,
    ) {
        debug!(phase = "late_tick", enabled, "set listener enabled");
        self.late_tick.set_enabled(listener, enabled);
    }

    /// Whether the listener is subscribed and enabled in the late-tick phase.
    pub fn is_enabled_for_late_tick(&self, listener: &(dyn LateTickListener + 'static)) -> bool {
        self.late_tick.is_enabled_for(listener)
    }

    // ========================================================================
    // Fixed-tick phase
    // ========================================================================

    /// Subscribe a listener to the fixed-tick phase.
    pub fn subscribe_to_fixed_tick(&self, listener: Rc<dyn FixedTickListener>) {
        debug!(phase = "fixed_tick", "subscribe listener");
        self.fixed_tick.subscribe(listener);
    }

    /// Unsubscribe a listener from the fixed-tick phase.
    pub fn unsubscribe_from_fixed_tick(&self, listener: &(dyn FixedTickListener + 'static)) {
        debug!(phase = "fixed_tick", "unsubscribe listener");
        self.fixed_tick.unsubscribe(listener);
    }

    /// Whether the listener is subscribed to the fixed-tick phase.
    pub fn is_subscribed_to_fixed_tick(&self, listener: &(dyn FixedTickListener + 'static)) -> bool {
        self.fixed_tick.is_subscribed(listener)
    }

    /// Set the listener's local enabled flag in the fixed-tick phase.
    pub fn set_enabled_for_fixed_tick(
        &self,
        listener: &(dyn FixedTickListener + 'static),
        enabled: bool,
    ) {
        debug!(phase = "fixed_tick", enabled, "set listener enabled");
        self.fixed_tick.set_enabled(listener, enabled);
    }

    /// Whether the listener is subscribed and enabled in the fixed-tick phase.
    pub fn is_enabled_for_fixed_tick(&self, listener: &(dyn FixedTickListener + 'static)) -> bool {
        self.fixed_tick.is_enabled_for(listener)
    }
}

impl FrameSink for Conductor {
    fn run_tick(&self) {
        trace!(phase = "tick", len = self.tick.len(), "dispatch pass");
        self.tick.dispatch(&self.enabled, |listener| listener.on_tick());
    }

    fn run_late_tick(&self) {
        trace!(phase = "late_tick", len = self.late_tick.len(), "dispatch pass");
        self.late_tick
            .dispatch(&self.enabled, |listener| listener.on_late_tick());
    }

    fn run_fixed_tick(&self) {
        trace!(phase = "fixed_tick", len = self.fixed_tick.len(), "dispatch pass");
        self.fixed_tick
            .dispatch(&self.enabled, |listener| listener.on_fixed_tick());
    }
}
