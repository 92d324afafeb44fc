//! In-memory credential table.

use super::AuthAgent;
use async_trait::async_trait;
use std::fmt;
use subtle::ConstantTimeEq;

/// A literal `user`/`pass` pair.
#[derive(Clone)]
pub struct Credential {
    user: Vec<u8>,
    pass: Vec<u8>,
}

impl Credential {
    /// Create a credential from its user name and password.
    pub fn new(user: impl AsRef<[u8]>, pass: impl AsRef<[u8]>) -> Self {
        Self {
            user: user.as_ref().to_vec(),
            pass: pass.as_ref().to_vec(),
        }
    }

    fn matches(&self, user: &[u8], pass: &[u8]) -> bool {
        // Password bytes are compared in constant time.
        self.user == user && bool::from(self.pass.as_slice().ct_eq(pass))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("user", &String::from_utf8_lossy(&self.user))
            .field("pass", &"<redacted>")
            .finish()
    }
}

/// Agent backed by a fixed, ordered list of credentials.
///
/// The table is immutable after construction, so one instance can serve
/// every connection without locking.
#[derive(Debug, Clone, Default)]
pub struct MemoryAgent {
    entries: Vec<Credential>,
}

impl MemoryAgent {
    /// Build the table. Order is preserved for lookups.
    pub fn new(entries: impl IntoIterator<Item = Credential>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no credentials are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl AuthAgent for MemoryAgent {
    async fn authenticate(&self, user: &[u8], pass: &[u8]) -> bool {
        if user.is_empty() || pass.is_empty() {
            return false;
        }
        self.entries.iter().any(|entry| entry.matches(user, pass))
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
