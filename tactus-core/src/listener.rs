//! # Phase Capability Layer (Listeners)
//!
//! A listener participates in a phase by implementing that phase's
//! capability trait. Each trait carries a single zero-argument callback
//! that a dispatcher invokes once per pass, in subscription order.
//!
//! # Contract
//!
//! 1. **Identity**: registries track listeners by reference identity
//!    (the `Rc` allocation), never by value. Two clones of one `Rc` are
//!    the same listener; two separate allocations are different
//!    listeners even if structurally equal.
//! 2. **Reentrancy**: a callback may call back into the dispatcher that
//!    is invoking it. Subscriptions made mid-pass join the current pass;
//!    removals mid-pass never skip or double-invoke other listeners.
//! 3. **State**: callbacks take `&self`. Listeners that mutate their own
//!    state keep it in `Cell`/`RefCell`.
//!
//! A type may implement any combination of the three capabilities; its
//! registrations in different phases are fully independent.

/// Listener capability for the per-frame tick phase.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be subscribed to the tick phase",
    label = "missing `TickListener` implementation",
    note = "implement `on_tick` to receive per-frame callbacks"
)]
pub trait TickListener {
    /// Called once per tick pass.
    fn on_tick(&self);
}

/// Listener capability for the end-of-frame late-tick phase.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be subscribed to the late-tick phase",
    label = "missing `LateTickListener` implementation",
    note = "implement `on_late_tick` to receive end-of-frame callbacks"
)]
pub trait LateTickListener {
    /// Called once per late-tick pass.
    fn on_late_tick(&self);
}

/// Listener capability for the fixed-rate tick phase.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be subscribed to the fixed-tick phase",
    label = "missing `FixedTickListener` implementation",
    note = "implement `on_fixed_tick` to receive fixed-rate callbacks"
)]
pub trait FixedTickListener {
    /// Called once per fixed-tick pass.
    fn on_fixed_tick(&self);
}
