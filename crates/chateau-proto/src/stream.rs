//! Byte-at-a-time reader with one byte of push-back.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads single bytes out of a buffered async reader.
///
/// The parser needs one byte of lookahead past a CR to tell a line
/// terminator from a bare CR; [`CharStream::putback`] gives that byte back.
#[derive(Debug)]
pub struct CharStream<R> {
    inner: R,
    pushback: Option<u8>,
}

impl<R: AsyncBufRead + Unpin> CharStream<R> {
    /// Wrap a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushback: None,
        }
    }

    /// Next byte, or `None` at end of input.
    pub async fn getchar(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.take() {
            return Ok(Some(byte));
        }
        loop {
            let byte = match self.inner.fill_buf().await {
                Ok(buf) => match buf.first() {
                    Some(&byte) => byte,
                    None => return Ok(None),
                },
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.inner.consume(1);
            return Ok(Some(byte));
        }
    }

    /// Return `byte` so the next [`getchar`](Self::getchar) yields it again.
    pub fn putback(&mut self, byte: u8) {
        debug_assert!(self.pushback.is_none(), "only one byte of push-back");
        self.pushback = Some(byte);
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consumes the stream, returning the underlying reader.
    ///
    /// A pushed-back byte, if any, is lost.
    pub fn into_inner(self) -> R {
        self.inner
    }
}
