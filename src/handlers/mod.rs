//! Command handlers.
//!
//! This module contains the Handler trait and command registry for dispatching
//! parsed messages to the appropriate handler. Only the registration commands
//! (NICK, PASS) have handlers; every other command is accepted and ignored
//! once its arity checks out.

mod connection;
mod context;
mod registry;

pub use context::{Context, Handler};
pub use registry::Registry;
