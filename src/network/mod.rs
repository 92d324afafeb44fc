//! Network module.
//!
//! Contains the Gateway (TCP listeners), the IRC Connection handler and the
//! XMPP slot.

mod connection;
mod gateway;
mod xmpp;

pub use gateway::Gateway;
