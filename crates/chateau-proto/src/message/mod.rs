//! The parsed representation of one client line.
//!
//! A [`Message`] owns a single byte buffer. The prefix components, the raw
//! command text and every parameter are spans into that buffer, so the
//! slices handed out by the accessors stay valid independently of the
//! socket's read buffer. A message is meant to be reused: call
//! [`Message::reset`] before every parse.

use std::fmt;

use smallvec::SmallVec;

use crate::command::Command;

/// Maximum number of parameters in one message (RFC 1459 §2.3).
pub const MAX_PARAMS: usize = 15;

/// Byte range inside a message buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Span {
    start: u32,
    end: u32,
}

impl Span {
    #[inline]
    fn slice<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.start as usize..self.end as usize]
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PrefixSpans {
    nick: Span,
    user: Option<Span>,
    host: Option<Span>,
}

/// Borrowed view of a message prefix: `nick_or_server[!user][@host]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefix<'a> {
    /// Nickname or server name. Never empty.
    pub nick: &'a [u8],
    /// User component, if a `!` was present.
    pub user: Option<&'a [u8]>,
    /// Host component, if a `@` was present.
    pub host: Option<&'a [u8]>,
}

/// One parsed protocol line.
///
/// # Example
///
/// ```
/// use chateau_proto::{Command, Message};
///
/// let mut msg = Message::new();
/// assert_eq!(msg.command(), Command::Unknown);
/// assert_eq!(msg.param_count(), 0);
/// msg.reset();
/// assert_eq!(msg, Message::new());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    buf: Vec<u8>,
    prefix: Option<PrefixSpans>,
    command: Command,
    command_span: Span,
    params: SmallVec<[Span; MAX_PARAMS]>,
}

impl Message {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field back to the empty state.
    ///
    /// The buffer keeps its capacity. Calling this twice is the same as
    /// calling it once.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.prefix = None;
        self.command = Command::Unknown;
        self.command_span = Span::default();
        self.params.clear();
    }

    /// True when nothing has been parsed into this message.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty() && self.prefix.is_none() && self.params.is_empty()
    }

    /// The prefix, if the line started with `:`.
    pub fn prefix(&self) -> Option<Prefix<'_>> {
        self.prefix.map(|p| Prefix {
            nick: p.nick.slice(&self.buf),
            user: p.user.map(|s| s.slice(&self.buf)),
            host: p.host.map(|s| s.slice(&self.buf)),
        })
    }

    /// The recognized command, or [`Command::Unknown`].
    #[inline]
    pub fn command(&self) -> Command {
        self.command
    }

    /// The command token exactly as received.
    #[inline]
    pub fn command_text(&self) -> &[u8] {
        self.command_span.slice(&self.buf)
    }

    /// Number of parameters.
    #[inline]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Parameter `index`, if present.
    pub fn param(&self, index: usize) -> Option<&[u8]> {
        self.params.get(index).map(|s| s.slice(&self.buf))
    }

    /// All parameters in order.
    pub fn params(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.params.iter().map(move |s| s.slice(&self.buf))
    }

    // Builder side, driven by the parser.

    #[inline]
    pub(crate) fn mark(&self) -> u32 {
        self.buf.len() as u32
    }

    #[inline]
    pub(crate) fn push_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    #[inline]
    pub(crate) fn span_since(&self, start: u32) -> Span {
        Span {
            start,
            end: self.mark(),
        }
    }

    pub(crate) fn set_prefix(&mut self, nick: Span, user: Option<Span>, host: Option<Span>) {
        self.prefix = Some(PrefixSpans { nick, user, host });
    }

    pub(crate) fn set_command(&mut self, span: Span) {
        self.command_span = span;
        self.command = Command::from_name(span.slice(&self.buf));
    }

    pub(crate) fn push_param(&mut self, span: Span) {
        debug_assert!(self.params.len() < MAX_PARAMS);
        self.params.push(span);
    }
}

impl fmt::Display for Message {
    /// Render the message back to wire form, without the terminator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix() {
            write!(f, ":{}", String::from_utf8_lossy(prefix.nick))?;
            if let Some(user) = prefix.user {
                write!(f, "!{}", String::from_utf8_lossy(user))?;
            }
            if let Some(host) = prefix.host {
                write!(f, "@{}", String::from_utf8_lossy(host))?;
            }
            f.write_str(" ")?;
        }
        f.write_str(&String::from_utf8_lossy(self.command_text()))?;

        let last = self.params.len().saturating_sub(1);
        for (i, param) in self.params().enumerate() {
            let trailing =
                i == last && (param.is_empty() || param.contains(&b' ') || param[0] == b':');
            let text = String::from_utf8_lossy(param);
            if trailing {
                write!(f, " :{}", text)?;
            } else {
                write!(f, " {}", text)?;
            }
        }
        Ok(())
    }
}
