//! Integration test common infrastructure.
//!
//! Provides utilities for spawning test daemons, creating test clients,
//! and asserting on reply lines.

pub mod client;
pub mod server;

#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::TestServer;
