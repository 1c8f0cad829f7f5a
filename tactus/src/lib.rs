//! # tactus - Per-Frame Phase Dispatch
//!
//! `tactus` is a per-frame callback dispatcher: three independently
//! ordered listener phases (tick, late tick, fixed tick) driven by an
//! external host loop. Listeners are invoked in subscription order, and
//! registration stays correct even when a listener mutates the rosters
//! or flips the gate from inside the pass that is dispatching it.
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use tactus::listeners::FnListener;
//! use tactus::prelude::*;
//!
//! let conductor = Rc::new(Conductor::new());
//!
//! // Subscribe a closure to the tick phase.
//! let greeter = Rc::new(FnListener::new(|| println!("tick")));
//! conductor.subscribe_to_tick(greeter.clone());
//!
//! // The host loop drives one frame.
//! conductor.run_tick();
//!
//! conductor.unsubscribe_from_tick(&*greeter);
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use tactus_core::{
    // Gate
    EnabledHandle,
    // Phase capabilities
    FixedTickListener,
    // Drive port
    FrameSink,
    LateTickListener,
    // Errors
    TactusError,
    TickListener,
};

pub use tactus_std::{conductor::Conductor, host::FrameHost, roster::Roster};

/// Standard listener adapters.
pub mod listeners {
    #![allow(clippy::wildcard_imports)]
    pub use tactus_std::listeners::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use tactus_std::testing::*;
}

/// Prelude module - common imports for Tactus.
///
/// # Usage
///
/// ```
/// use tactus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Conductor,
        EnabledHandle,
        FixedTickListener,
        FrameHost,
        FrameSink,
        LateTickListener,
        Roster,
        TactusError,
        TickListener,
    };
}
