//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Top-level config struct and loading (Config, ServerConfig)
//! - [`listen`]: Listener configuration (ListenConfig, Protocol)
//! - [`limits`]: Protocol limits (LimitsConfig)
//! - [`auth`]: Authentication backend and credential table (AuthConfig)
//! - [`validation`]: Startup checks over a loaded config

mod auth;
mod limits;
mod listen;
mod types;
mod validation;

pub use auth::{AuthBackend, AuthConfig};
pub use listen::{ListenConfig, Protocol};
pub use types::Config;
pub use validation::validate;
