//! Authentication agents.
//!
//! An [`AuthAgent`] decides whether a `user`/`pass` pair collected during
//! NICK/PASS registration is valid. One agent is built from config at startup
//! and shared by every session.

mod memory;
mod pam;

pub use memory::{Credential, MemoryAgent};
pub use pam::PamAgent;

use crate::config::{AuthBackend, AuthConfig};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Verifies registration credentials.
///
/// Implementations never fail: anything that cannot be verified, including
/// empty input, is simply rejected.
#[async_trait]
pub trait AuthAgent: Send + Sync {
    /// True if `user` may register with `pass`.
    async fn authenticate(&self, user: &[u8], pass: &[u8]) -> bool;

    /// Backend name for logging.
    fn kind(&self) -> &'static str;
}

/// Build the agent selected by `config`.
pub fn from_config(config: &AuthConfig) -> Arc<dyn AuthAgent> {
    match config.backend {
        AuthBackend::Memory => {
            let agent = MemoryAgent::new(
                config
                    .users
                    .iter()
                    .map(|entry| Credential::new(&entry.user, &entry.pass)),
            );
            if agent.is_empty() {
                warn!("In-memory credential table is empty, every login will be rejected");
            }
            info!(users = agent.len(), "Using in-memory credential table");
            Arc::new(agent)
        }
        AuthBackend::Pam => {
            let agent = PamAgent::new(config.pam_service.as_deref());
            info!(service = %agent.service(), "Using PAM authentication");
            Arc::new(agent)
        }
    }
}
