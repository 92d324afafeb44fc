//! Per-connection state.

mod session;

pub use session::SessionState;
