use std::cell::Cell;
use tactus::FrameSink;

// ============================================================================
// Test Sinks
// ============================================================================

/// Stub sink counting how often each phase is pumped.
#[derive(Default)]
pub struct CountingSink {
    pub ticks: Cell<usize>,
    pub late_ticks: Cell<usize>,
    pub fixed_ticks: Cell<usize>,
}

impl FrameSink for CountingSink {
    fn run_tick(&self) {
        self.ticks.set(self.ticks.get() + 1);
    }

    fn run_late_tick(&self) {
        self.late_ticks.set(self.late_ticks.get() + 1);
    }

    fn run_fixed_tick(&self) {
        self.fixed_ticks.set(self.fixed_ticks.get() + 1);
    }
}
