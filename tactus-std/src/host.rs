//! # Frame Host
//!
//! [`FrameHost`] is the registration service between an external
//! scheduler loop and any number of [`FrameSink`]s. The loop owns the
//! timing: once per frame it calls [`tick`](FrameHost::tick) and
//! [`late_tick`](FrameHost::late_tick), and once per fixed step
//! [`fixed_tick`](FrameHost::fixed_tick); the host forwards each pump to
//! every attached sink in attach order.
//!
//! The host is deliberately trivial. It snapshots the sink list per
//! pump, so attaching or detaching a sink from inside a pump takes
//! effect at the next pump; the reentrancy guarantees for listener
//! registration live in the rosters behind each sink, not here.

use std::cell::RefCell;
use std::fmt;
use std::ptr;
use std::rc::Rc;

use tactus_core::{FrameSink, TactusError};
use tracing::debug;

/// Registration service driving attached [`FrameSink`]s.
#[derive(Default)]
pub struct FrameHost {
    sinks: RefCell<Vec<Rc<dyn FrameSink>>>,
}

impl FrameHost {
    /// Create a host with no attached sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a sink; pumps reach it from the next pump on.
    ///
    /// # Errors
    ///
    /// [`TactusError::AlreadyAttached`] if this sink (by reference
    /// identity) is already attached.
    pub fn attach(&self, sink: Rc<dyn FrameSink>) -> Result<(), TactusError> {
        if self.is_attached(&*sink) {
            return Err(TactusError::AlreadyAttached);
        }
        debug!("sink attached");
        self.sinks.borrow_mut().push(sink);
        Ok(())
    }

    /// Detach a sink by reference identity.
    ///
    /// Returns whether a sink was removed; detaching an absent sink is
    /// not an error.
    pub fn detach(&self, sink: &dyn FrameSink) -> bool {
        let mut sinks = self.sinks.borrow_mut();
        match sinks
            .iter()
            .position(|attached| ptr::addr_eq(Rc::as_ptr(attached), sink))
        {
            Some(index) => {
                sinks.remove(index);
                debug!("sink detached");
                true
            }
            None => false,
        }
    }

    /// Whether the sink is currently attached.
    pub fn is_attached(&self, sink: &dyn FrameSink) -> bool {
        self.sinks
            .borrow()
            .iter()
            .any(|attached| ptr::addr_eq(Rc::as_ptr(attached), sink))
    }

    /// Number of attached sinks.
    pub fn len(&self) -> usize {
        self.sinks.borrow().len()
    }

    /// Whether no sinks are attached.
    pub fn is_empty(&self) -> bool {
        self.sinks.borrow().is_empty()
    }

    /// Pump the tick phase of every attached sink.
    pub fn tick(&self) {
        for sink in self.snapshot() {
            sink.run_tick();
        }
    }

    /// Pump the late-tick phase of every attached sink.
    pub fn late_tick(&self) {
        for sink in self.snapshot() {
            sink.run_late_tick();
        }
    }

    /// Pump the fixed-tick phase of every attached sink.
    pub fn fixed_tick(&self) {
        for sink in self.snapshot() {
            sink.run_fixed_tick();
        }
    }

    fn snapshot(&self) -> Vec<Rc<dyn FrameSink>> {
        self.sinks.borrow().clone()
    }
}

impl fmt::Debug for FrameHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameHost").field("sinks", &self.len()).finish()
    }
}
