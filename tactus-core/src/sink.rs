//! Host-facing drive port.

/// A sink for the host's periodic frame triggers.
///
/// The host environment fires three periodic hooks, once per frame or
/// fixed step; each maps 1:1 to one drive method here. Dispatchers
/// implement this trait; host harnesses hold `Rc<dyn FrameSink>` and
/// pump it from their scheduler loop, which keeps the harness testable
/// against a stub sink.
///
/// Drive methods return nothing and never fail: a sink with no work to
/// do simply does nothing.
pub trait FrameSink {
    /// Drive one tick pass.
    fn run_tick(&self);

    /// Drive one late-tick pass.
    fn run_late_tick(&self);

    /// Drive one fixed-tick pass.
    fn run_fixed_tick(&self);
}
