//! PAM authentication placeholder.

use super::AuthAgent;
use async_trait::async_trait;
use tracing::debug;

/// Service name used when none is configured.
pub const DEFAULT_PAM_SERVICE: &str = "chateau";

/// PAM-backed agent. There is no PAM binding behind it yet, so every attempt
/// is rejected; only the service name is kept.
#[derive(Debug, Clone)]
pub struct PamAgent {
    service: String,
}

impl PamAgent {
    /// Create an agent for `service`, or [`DEFAULT_PAM_SERVICE`].
    pub fn new(service: Option<&str>) -> Self {
        Self {
            service: service.unwrap_or(DEFAULT_PAM_SERVICE).to_string(),
        }
    }

    /// Configured PAM service name.
    pub fn service(&self) -> &str {
        &self.service
    }
}

#[async_trait]
impl AuthAgent for PamAgent {
    async fn authenticate(&self, user: &[u8], _pass: &[u8]) -> bool {
        debug!(
            service = %self.service,
            user = %String::from_utf8_lossy(user),
            "PAM authentication unavailable, rejecting"
        );
        false
    }

    fn kind(&self) -> &'static str {
        "pam"
    }
}
