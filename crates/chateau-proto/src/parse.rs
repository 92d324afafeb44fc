//! Recursive-descent recognizer for one RFC 1459 line.
//!
//! ```text
//! message ::= [':' prefix SPACE] command params CRLF
//! prefix  ::= nick ['!' user] ['@' host]
//! params  ::= (SPACE+ param)*
//! param   ::= ':' <rest of line> | <token up to SPACE or CRLF>
//! ```
//!
//! The parser keeps a single byte of lookahead. CR LF folds into one
//! terminator. A CR followed by anything else, and a lone LF, are ordinary
//! bytes. Reading stops at the terminator, so the next call starts
//! exactly at the next line.

use tokio::io::AsyncBufRead;
use tracing::trace;

use crate::error::ParseError;
use crate::message::{Message, Span, MAX_PARAMS};
use crate::stream::CharStream;

/// Default cap on the bytes of a line before its terminator.
///
/// The terminator is not counted, so a line may take 514 bytes on the wire,
/// two more than RFC 1459 §2.3 allows. Clients that send 512-byte lines with
/// CR LF included are therefore never rejected.
pub const DEFAULT_MAX_LINE_LEN: usize = 512;

/// Successful outcome of [`Parser::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parsed {
    /// A complete message was stored.
    Message,
    /// The stream ended, possibly in the middle of a line.
    EndOfInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Look {
    Byte(u8),
    Crlf,
}

/// Why recognition stopped early.
enum Halt {
    Eof,
    Fail(ParseError),
}

impl From<std::io::Error> for Halt {
    fn from(e: std::io::Error) -> Self {
        Halt::Fail(ParseError::Io(e))
    }
}

type Step<T = ()> = Result<T, Halt>;

/// Line parser over a buffered async reader.
#[derive(Debug)]
pub struct Parser<R> {
    stream: CharStream<R>,
    max_line_len: usize,
    look: Look,
    position: u32,
}

impl<R: AsyncBufRead + Unpin> Parser<R> {
    /// Create a parser with [`DEFAULT_MAX_LINE_LEN`].
    pub fn new(reader: R) -> Self {
        Self::with_max_line_len(reader, DEFAULT_MAX_LINE_LEN)
    }

    /// Create a parser rejecting lines longer than `max_line_len` bytes.
    pub fn with_max_line_len(reader: R, max_line_len: usize) -> Self {
        Self {
            stream: CharStream::new(reader),
            max_line_len,
            look: Look::Crlf,
            position: 0,
        }
    }

    /// Configured line length cap.
    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        self.stream.get_ref()
    }

    /// Read the next line into `msg`.
    ///
    /// `msg` should be freshly [reset](Message::reset). On a structural error
    /// the stream is left somewhere inside the offending line.
    pub async fn parse(&mut self, msg: &mut Message) -> Result<Parsed, ParseError> {
        debug_assert!(msg.is_empty(), "message must be reset before parsing");
        self.position = 0;
        match self.parse_message(msg).await {
            Ok(()) => Ok(Parsed::Message),
            Err(Halt::Eof) => Ok(Parsed::EndOfInput),
            Err(Halt::Fail(err)) => {
                trace!(error = %err, code = err.error_code(), "parse failed");
                Err(err)
            }
        }
    }

    async fn next(&mut self) -> Step {
        let look = match self.stream.getchar().await? {
            None => return Err(Halt::Eof),
            Some(b'\r') => match self.stream.getchar().await? {
                Some(b'\n') => {
                    self.position = self.position.saturating_add(1);
                    Look::Crlf
                }
                Some(other) => {
                    self.stream.putback(other);
                    Look::Byte(b'\r')
                }
                None => return Err(Halt::Eof),
            },
            Some(byte) => Look::Byte(byte),
        };
        self.position = self.position.saturating_add(1);

        if matches!(look, Look::Byte(_)) && self.position as usize > self.max_line_len {
            return Err(Halt::Fail(ParseError::TooLong {
                limit: self.max_line_len,
            }));
        }
        self.look = look;
        Ok(())
    }

    fn syntax(&self, reason: &'static str) -> Halt {
        Halt::Fail(ParseError::Syntax {
            position: self.position,
            reason,
        })
    }

    async fn skip_space(&mut self) -> Step {
        while self.look == Look::Byte(b' ') {
            self.next().await?;
        }
        Ok(())
    }

    /// Append bytes to `msg` until the terminator or one of `stop`.
    async fn take_until(&mut self, msg: &mut Message, stop: &[u8]) -> Step<Span> {
        let start = msg.mark();
        while let Look::Byte(byte) = self.look {
            if stop.contains(&byte) {
                break;
            }
            msg.push_byte(byte);
            self.next().await?;
        }
        Ok(msg.span_since(start))
    }

    async fn parse_message(&mut self, msg: &mut Message) -> Step {
        self.next().await?;
        if self.look == Look::Byte(b':') {
            self.parse_prefix(msg).await?;
            if self.look != Look::Byte(b' ') {
                return Err(self.syntax("Space expected"));
            }
            self.skip_space().await?;
        }

        let command = self.take_until(msg, b" ").await?;
        if command.is_empty() {
            return Err(self.syntax("Missing command"));
        }
        msg.set_command(command);

        self.parse_params(msg).await
    }

    async fn parse_prefix(&mut self, msg: &mut Message) -> Step {
        self.next().await?;
        let nick = self.take_until(msg, b" !@").await?;
        if nick.is_empty() {
            return Err(self.syntax("Nick or servername missing in prefix"));
        }

        let mut user = None;
        if self.look == Look::Byte(b'!') {
            self.next().await?;
            let span = self.take_until(msg, b" @").await?;
            if span.is_empty() {
                return Err(self.syntax("User missing in prefix"));
            }
            user = Some(span);
        }

        let mut host = None;
        if self.look == Look::Byte(b'@') {
            self.next().await?;
            let span = self.take_until(msg, b" ").await?;
            if span.is_empty() {
                return Err(self.syntax("Host missing in prefix"));
            }
            host = Some(span);
        }

        msg.set_prefix(nick, user, host);
        Ok(())
    }

    async fn parse_params(&mut self, msg: &mut Message) -> Step {
        loop {
            self.skip_space().await?;
            match self.look {
                Look::Crlf => return Ok(()),
                Look::Byte(_) if msg.param_count() == MAX_PARAMS => {
                    return Err(Halt::Fail(ParseError::TooManyParams {
                        position: self.position,
                        limit: MAX_PARAMS,
                    }));
                }
                Look::Byte(b':') => {
                    self.next().await?;
                    let trailing = self.take_until(msg, b"").await?;
                    msg.push_param(trailing);
                    return Ok(());
                }
                Look::Byte(_) => {
                    let middle = self.take_until(msg, b" ").await?;
                    msg.push_param(middle);
                }
            }
        }
    }
}
