//! Authentication backend configuration.

use serde::Deserialize;
use std::fmt;

/// Which authentication agent verifies NICK/PASS registrations.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthBackend {
    /// Static credential table from `[[auth.users]]`.
    #[default]
    Memory,
    /// PAM service. Not wired to a real PAM stack; every attempt is rejected.
    Pam,
}

/// Authentication configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Backend to use (default: memory).
    #[serde(default)]
    pub backend: AuthBackend,
    /// PAM service name (default: "chateau").
    pub pam_service: Option<String>,
    /// Credential table for the memory backend, checked in order.
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

/// One `user`/`pass` pair.
#[derive(Clone, Deserialize)]
pub struct UserEntry {
    /// User name, matched against the NICK parameter.
    pub user: String,
    /// Password, matched against the PASS parameter.
    pub pass: String,
}

impl fmt::Debug for UserEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEntry")
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}
