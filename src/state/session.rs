//! Registration state of one connection.
//!
//! ```text
//! ┌──────────────┐  NICK+PASS accepted  ┌────────────┐
//! │ Unregistered │ ───────────────────▶ │ Registered │
//! └──────────────┘                      └────────────┘
//! ```
//!
//! Closing is not a phase: the session loop simply returns.

use std::fmt;

/// Registration phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a valid NICK/PASS pair.
    #[default]
    Unregistered,
    /// Credentials were accepted.
    Registered,
}

/// Credentials collected so far and the current phase.
#[derive(Default)]
pub struct SessionState {
    user: Vec<u8>,
    pass: Vec<u8>,
    phase: Phase,
}

impl SessionState {
    /// Fresh, unregistered state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_registered(&self) -> bool {
        self.phase == Phase::Registered
    }

    /// Last NICK parameter.
    pub fn user(&self) -> &[u8] {
        &self.user
    }

    /// Last PASS parameter.
    pub fn pass(&self) -> &[u8] {
        &self.pass
    }

    /// Replace the stored user name.
    pub fn set_user(&mut self, user: &[u8]) {
        self.user.clear();
        self.user.extend_from_slice(user);
    }

    /// Replace the stored password.
    pub fn set_pass(&mut self, pass: &[u8]) {
        self.pass.clear();
        self.pass.extend_from_slice(pass);
    }

    /// Both a user name and a password have been received.
    pub fn credentials_ready(&self) -> bool {
        !self.user.is_empty() && !self.pass.is_empty()
    }

    /// Move to [`Phase::Registered`].
    pub fn register(&mut self) {
        self.phase = Phase::Registered;
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("user", &String::from_utf8_lossy(&self.user))
            .field("pass_set", &!self.pass.is_empty())
            .field("phase", &self.phase)
            .finish()
    }
}
