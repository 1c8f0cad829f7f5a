//! # tactus-std
//!
//! Standard implementations for the Tactus frame dispatch library.
//!
//! This crate provides:
//! - **The phase registry**: [`Roster`](roster::Roster), the ordered
//!   reentrancy-safe listener registry behind one phase
//! - **The dispatcher**: [`Conductor`](conductor::Conductor), three
//!   rosters behind one shared gate
//! - **Host glue**: [`FrameHost`](host::FrameHost), attach/detach and
//!   per-frame pumping of [`FrameSink`](tactus_core::FrameSink)s
//! - **Listener adapters**: closures and cadence wrappers
//! - **Testing helpers**: journals and recording listeners

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use tactus_core;

// Modules
pub mod conductor;
pub mod host;
pub mod listeners;
pub mod roster;
pub mod testing;
