//! # tactus-core
//!
//! Core traits for the Tactus frame dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! integrations and adapters that don't need the full `tactus-std`
//! implementation.
//!
//! # Three-Layer Architecture
//!
//! Tactus is built on three small layers, each owning one side of the
//! per-frame dispatch contract:
//!
//! ## Layer 1: Phase Capabilities ([`TickListener`], [`LateTickListener`], [`FixedTickListener`])
//!
//! The participant side. A listener joins a phase by implementing that
//! phase's capability trait: a single zero-argument callback invoked once
//! per dispatch pass.
//!
//! - **Per-phase**: one trait per phase, so a registry for one phase can
//!   only ever hold listeners of that phase
//! - **Reentrant**: a callback may call back into the dispatcher that is
//!   invoking it (subscribe, unsubscribe, enable, disable)
//! - **Shared-reference**: callbacks take `&self`; listeners keep mutable
//!   state in interior-mutability cells
//!
//! ## Layer 2: Gate ([`EnabledHandle`])
//!
//! The control side. A cloneable on/off switch shared between a
//! dispatcher and its three phase registries, checked live between
//! dispatch steps so a mid-pass flip stops the pass before the next
//! listener runs.
//!
//! ## Layer 3: Drive Port ([`FrameSink`])
//!
//! The host side. An object-safe port with one drive method per phase.
//! The host's scheduler loop fires each periodic hook into the matching
//! drive method; dispatchers implement the port, harnesses and test
//! stubs substitute for it.
//!
//! # Error Types
//!
//! - [`TactusError`] - Boundary-layer error type. Registry and dispatch
//!   operations themselves are total and return no `Result`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod enabled;
mod error;
mod listener;
mod sink;

// Re-exports
pub use enabled::EnabledHandle;
pub use error::TactusError;
pub use listener::{FixedTickListener, LateTickListener, TickListener};
pub use sink::FrameSink;
