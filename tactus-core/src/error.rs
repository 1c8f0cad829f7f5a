//! Error types for Tactus.
//!
//! The registry and dispatch core is total: absent listeners answer
//! queries with `false` and mutation of an absent listener is a silent
//! no-op, so none of those operations return a `Result`. Errors exist
//! only at the boundary layers, where a caller hands over something the
//! type system cannot rule out.

use thiserror::Error;

/// Boundary-layer error type for Tactus operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TactusError {
    /// The sink is already attached to this host.
    #[error("sink is already attached to this host")]
    AlreadyAttached,

    /// A cadence adapter was given a period of zero.
    #[error("cadence period must be at least 1")]
    ZeroPeriod,
}
