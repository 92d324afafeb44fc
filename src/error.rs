//! Unified error handling for chateaud.
//!
//! Three layers: handler errors that become numeric replies, the reason a
//! session ended, and listener failures that stop the process.

use chateau_proto::{ParseError, RenderError, ReplyArg, Response};
use std::io;
use std::net::SocketAddr;
use thiserror::Error;

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("not enough parameters for {0}")]
    NeedMoreParams(String),

    #[error("no nickname given")]
    NoNicknameGiven,

    #[error("erroneous nickname: {}", String::from_utf8_lossy(.0))]
    ErroneousNickname(Vec<u8>),

    #[error("already registered")]
    AlreadyRegistered,

    /// Credentials were rejected; the session closes after the reply.
    #[error("password mismatch")]
    PasswdMismatch,
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreParams(_) => "need_more_params",
            Self::NoNicknameGiven => "no_nickname_given",
            Self::ErroneousNickname(_) => "erroneous_nickname",
            Self::AlreadyRegistered => "already_registered",
            Self::PasswdMismatch => "passwd_mismatch",
        }
    }

    /// Whether the session must close once the reply is sent.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::PasswdMismatch)
    }

    /// Numeric reply and rendered body for this error.
    pub fn to_reply(&self) -> Result<(Response, Vec<u8>), RenderError> {
        let (response, body) = match self {
            Self::NeedMoreParams(cmd) => (
                Response::ERR_NEEDMOREPARAMS,
                Response::ERR_NEEDMOREPARAMS.render(&[cmd.as_str().into()])?,
            ),
            Self::NoNicknameGiven => (
                Response::ERR_NONICKNAMEGIVEN,
                Response::ERR_NONICKNAMEGIVEN.render(&[])?,
            ),
            Self::ErroneousNickname(nick) => (
                Response::ERR_ERRONEUSNICKNAME,
                Response::ERR_ERRONEUSNICKNAME.render(&[ReplyArg::Str(nick.as_slice())])?,
            ),
            Self::AlreadyRegistered => (
                Response::ERR_ALREADYREGISTRED,
                Response::ERR_ALREADYREGISTRED.render(&[])?,
            ),
            Self::PasswdMismatch => (
                Response::ERR_PASSWDMISMATCH,
                Response::ERR_PASSWDMISMATCH.render(&[])?,
            ),
        };
        Ok((response, body))
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Session Close Reasons
// ============================================================================

/// Why a session ended.
#[derive(Debug, Error)]
pub enum CloseReason {
    /// The peer closed its side, possibly mid-line.
    #[error("end of input")]
    EndOfInput,

    /// The line violated the message grammar. No reply is sent.
    #[error("parse error: {0}")]
    Parse(ParseError),

    /// NICK/PASS credentials were rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl From<ParseError> for CloseReason {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Io(e) => CloseReason::Io(e),
            other => CloseReason::Parse(other),
        }
    }
}

impl CloseReason {
    /// Get a static error code string for log labeling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EndOfInput => "end_of_input",
            Self::Parse(e) => e.error_code(),
            Self::AuthenticationFailed => "authentication_failed",
            Self::Io(_) => "io",
        }
    }

    /// True when the peer simply went away.
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

// ============================================================================
// Listener Errors (fatal)
// ============================================================================

/// A listener could not be set up or stopped accepting.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("listener {name}: cannot listen on {address}: {source}")]
    Bind {
        name: String,
        address: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("listener {name}: accept failed: {source}")]
    Accept {
        name: String,
        #[source]
        source: io::Error,
    },
}
