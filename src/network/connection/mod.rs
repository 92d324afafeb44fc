//! Connection - Runs one client session.
//!
//! Each Connection runs in its own Tokio task:
//!
//! ```text
//!   ┌────────┐   Message    ┌──────────┐  HandlerError  ┌────────┐
//!   │ Parser │ ───────────▶ │ Registry │ ─────────────▶ │ Writer │
//!   └────────┘              └──────────┘                └────────┘
//!       ▲                        │
//!       │                        ▼
//!   read half              SessionState
//! ```
//!
//! Messages are handled strictly in arrival order. The session ends at end of
//! input, on the first I/O or parse error, or when authentication fails.

mod error_handling;

use error_handling::handler_error_to_reply;

use crate::auth::AuthAgent;
use crate::error::{CloseReason, HandlerError};
use crate::handlers::{Context, Registry};
use crate::state::SessionState;
use chateau_proto::{Command, Message, Parsed, Parser};
use std::fmt;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// A client connection handler.
pub struct Connection<R, W> {
    parser: Parser<R>,
    writer: W,
    state: SessionState,
    auth: Arc<dyn AuthAgent>,
    registry: Arc<Registry>,
}

impl<R, W> Connection<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a connection handler over a buffered reader and a writer.
    pub fn new(
        reader: R,
        writer: W,
        max_line_len: usize,
        auth: Arc<dyn AuthAgent>,
        registry: Arc<Registry>,
    ) -> Self {
        Self {
            parser: Parser::with_max_line_len(reader, max_line_len),
            writer,
            state: SessionState::new(),
            auth,
            registry,
        }
    }

    /// Run the session to completion.
    ///
    /// Pending output is flushed and the write side shut down before
    /// returning, whatever the reason for closing.
    pub async fn run(mut self) -> CloseReason {
        let reason = self.serve().await;
        debug!(phase = ?self.state.phase(), "Session ended");

        match &reason {
            CloseReason::EndOfInput => debug!("Client closed connection"),
            CloseReason::AuthenticationFailed => info!("Closing after failed authentication"),
            other => warn!(error = %other, code = other.error_code(), "Closing connection"),
        }

        if let Err(e) = self.close().await {
            debug!(error = %e, "Error while closing connection");
        }
        reason
    }

    async fn serve(&mut self) -> CloseReason {
        let mut msg = Message::new();
        loop {
            msg.reset();
            match self.parser.parse(&mut msg).await {
                Ok(Parsed::Message) => {}
                Ok(Parsed::EndOfInput) => return CloseReason::EndOfInput,
                Err(e) => return CloseReason::from(e),
            }
            debug!(message = %Redacted(&msg), "Parsed message");

            let result = {
                let mut ctx = Context::new(&mut self.state, self.auth.as_ref());
                self.registry.dispatch(&mut ctx, &msg).await
            };

            if let Err(err) = result {
                debug!(code = err.error_code(), "Command failed");
                if let Err(e) = self.send_error(&err).await {
                    return CloseReason::Io(e);
                }
                if err.is_fatal() {
                    return CloseReason::AuthenticationFailed;
                }
            }
        }
    }

    /// Write the reply for `err` and flush it.
    async fn send_error(&mut self, err: &HandlerError) -> io::Result<()> {
        let Some(line) = handler_error_to_reply(err) else {
            return Ok(());
        };
        self.writer.write_all(&line).await?;
        self.writer.flush().await
    }

    async fn close(&mut self) -> io::Result<()> {
        self.writer.flush().await?;
        self.writer.shutdown().await
    }
}

/// Log view of a message that hides PASS arguments.
struct Redacted<'a>(&'a Message);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.command() != Command::PASS {
            return fmt::Display::fmt(self.0, f);
        }
        f.write_str("PASS")?;
        for _ in self.0.params() {
            f.write_str(" <redacted>")?;
        }
        Ok(())
    }
}
