//! Standard listener adapters.

pub mod every_nth;
pub mod fn_listener;

pub use every_nth::EveryNth;
pub use fn_listener::FnListener;
